use std::rc::Rc;

/// An abstract syntax tree (AST) node.
///
/// `Expr` is the closed set of constructs the parser produces: literals,
/// variables, operator applications, function definitions and calls,
/// immediately-applied lambdas and conditionals. Every node is an immutable
/// value; the parser guarantees shape, so the evaluator only resolves names
/// and values.
///
/// Nodes that can fail at runtime carry the source line they started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number(i64),
    /// A boolean literal.
    Boolean(bool),
    /// Reference to a variable by name, resolved at evaluation time.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`!x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or logic).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A named function definition. Evaluating it registers the definition.
    FunctionDef(Rc<FunctionDef>),
    /// Function call expression (e.g. `add(1, 2)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An anonymous function applied to its own argument list.
    Lambda {
        /// Parameter names.
        params:    Vec<String>,
        /// Argument expressions the lambda is applied to.
        arguments: Vec<Self>,
        /// The body evaluated with the parameters bound.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Conditional expression with an optional else branch.
    IfElse {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is truthy.
        then_branch: Box<Self>,
        /// Expression evaluated otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    ///
    /// Literals carry no location and report line `0`.
    /// ## Example
    /// ```
    /// use lambd::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// assert_eq!(Expr::Number(1).line_number(), 0);
    /// ```
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Number(_) | Self::Boolean(_) => 0,
            Self::FunctionDef(def) => def.line,
            Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::Lambda { line, .. }
            | Self::IfElse { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function definition.
///
/// The definition itself is what gets stored in the environment; its body is
/// only evaluated when the function is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Expr,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
    /// Floor remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Short-circuiting logical and (`&&`)
    And,
    /// Short-circuiting logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
        }
    }
}

/// Renders a node as parseable, fully parenthesized source.
///
/// Binary nodes render as `(<left> <op> <right>)`, unary nodes as
/// `(<op><operand>)` and literals as their value. Parsing the rendering
/// yields an equal tree.
///
/// ## Example
/// ```
/// use lambd::{ast::Expr, interpreter::parser::core::Parser};
///
/// let program = Parser::from_source("15 - 5 * 3").parse().unwrap();
/// assert_eq!(program[0].to_string(), "(15 - (5 * 3))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(true) => write!(f, "True"),
            Self::Boolean(false) => write!(f, "False"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionDef(def) => write!(f, "{def}"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                write_list(f, arguments)?;
                write!(f, ")")
            },
            Self::Lambda { params,
                           arguments,
                           body,
                           .. } => {
                write!(f, "(Lambd ")?;
                write_list(f, params)?;
                write!(f, ".({body})(")?;
                write_list(f, arguments)?;
                write!(f, "))")
            },
            Self::IfElse { condition,
                           then_branch,
                           else_branch,
                           .. } => {
                write!(f, "(if ({condition}) {{ {then_branch} }}")?;
                if let Some(else_branch) = else_branch {
                    write!(f, " else {{ {else_branch} }}")?;
                }
                write!(f, ")")
            },
        }
    }
}

impl std::fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(Defun {{ {}, (", self.name)?;
        write_list(f, &self.params)?;
        write!(f, ") }} {})", self.body)
    }
}

/// Writes `items` separated by `", "`.
fn write_list<T: std::fmt::Display>(f: &mut std::fmt::Formatter<'_>,
                                    items: &[T])
                                    -> std::fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
