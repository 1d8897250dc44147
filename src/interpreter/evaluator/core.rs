use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::value::{
        core::Value,
        environment::{Binding, Environment},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested function and lambda applications.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Default limit on nested expression evaluations, counted across calls.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 1024;

/// Tunable limits for an [`Interpreter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// How many function or lambda applications may be active at once before
    /// evaluation fails with `RecursionLimitExceeded`.
    pub max_call_depth:    usize,
    /// How many expression evaluations may be nested at once, including
    /// those inside active calls, before evaluation fails with
    /// `NestingLimitExceeded`.
    pub max_nesting_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self { max_call_depth:    DEFAULT_MAX_CALL_DEPTH,
               max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH, }
    }
}

/// Tree-walking evaluator.
///
/// Holds the single current [`Environment`]. Function definitions are
/// registered into it; calls and lambda applications temporarily replace it
/// with an extended copy and put the caller's environment back when they
/// return, whether they succeed or fail.
///
/// ## Usage
///
/// `Interpreter` is created once and reused across statements, so functions
/// defined by one statement are visible to later ones.
///
/// ```
/// use lambd::interpreter::{
///     evaluator::core::Interpreter, parser::core::Parser, value::core::Value,
/// };
///
/// let mut interpreter = Interpreter::new();
///
/// let definition = Parser::from_source("Defun { add, (x, y) } x + y").parse().unwrap();
/// assert_eq!(interpreter.interpret(&definition).unwrap(), None);
///
/// let call = Parser::from_source("add(5, 3)").parse().unwrap();
/// assert_eq!(interpreter.interpret(&call).unwrap(), Some(Value::Integer(8)));
/// ```
pub struct Interpreter {
    pub(in crate::interpreter::evaluator) env:     Environment,
    pub(in crate::interpreter::evaluator) config:  InterpreterConfig,
    pub(in crate::interpreter::evaluator) depth:   usize,
    pub(in crate::interpreter::evaluator) nesting: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with an empty environment and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(InterpreterConfig::default())
    }

    /// Creates an interpreter with an empty environment and the given limits.
    #[must_use]
    pub fn with_config(config: InterpreterConfig) -> Self {
        Self { env: Environment::new(),
               config,
               depth: 0,
               nesting: 0 }
    }

    /// Returns a read-only view of the current environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Returns the limits this interpreter was created with.
    #[must_use]
    pub const fn config(&self) -> InterpreterConfig {
        self.config
    }

    /// Evaluates top-level statements in order.
    ///
    /// Evaluation stops at the first statement that produces a value, and that
    /// value is returned. Definitions produce no value, so a program of only
    /// definitions returns `None`.
    ///
    /// # Errors
    /// Returns the first runtime error raised by any statement.
    pub fn interpret(&mut self, program: &[Expr]) -> EvalResult<Option<Value>> {
        for statement in program {
            if let Some(value) = self.eval(statement)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for
    /// definitions and for an `if` without `else` whose condition is falsy.
    ///
    /// # Errors
    /// `NestingLimitExceeded` if more than `max_nesting_depth` evaluations
    /// would be active, plus any error raised by the expression itself.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        let limit = self.config.max_nesting_depth;
        if self.nesting >= limit {
            return Err(RuntimeError::NestingLimitExceeded { limit,
                                                            line: expr.line_number() });
        }

        self.nesting += 1;
        let result = self.eval_node(expr);
        self.nesting -= 1;

        result
    }

    fn eval_node(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Number(n) => Ok(Some(Value::Integer(*n))),
            Expr::Boolean(b) => Ok(Some(Value::Bool(*b))),
            Expr::Variable { name, line } => self.eval_variable(name, *line).map(Some),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line).map(Some),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line).map(Some),
            Expr::FunctionDef(def) => {
                self.define_function(def);
                Ok(None)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
            Expr::Lambda { params,
                           arguments,
                           body,
                           line, } => self.eval_lambda(params, arguments, body, *line),
            Expr::IfElse { condition,
                           then_branch,
                           else_branch,
                           line, } => {
                self.eval_if_else(condition, then_branch, else_branch.as_deref(), *line)
            },
        }
    }

    /// Evaluates an expression that must produce a value.
    ///
    /// Used for operands, conditions and arguments.
    ///
    /// # Errors
    /// `MissingValue` if the expression yields nothing, in addition to any
    /// error from evaluating it.
    pub(crate) fn eval_child(&mut self, expr: &Expr, line: usize) -> EvalResult<Value> {
        self.eval(expr)?
            .ok_or(RuntimeError::MissingValue { line })
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// - `UnknownVariable` if the name is unbound.
    /// - `FunctionUsedAsValue` if the name is bound to a function.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        match self.env.get(name) {
            Some(Binding::Value(value)) => Ok(*value),
            Some(Binding::Function(_)) => {
                Err(RuntimeError::FunctionUsedAsValue { name: name.to_string(),
                                                        line })
            },
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// Registers a function definition under its name.
    ///
    /// The body is not evaluated. A later definition with the same name
    /// replaces the earlier one.
    fn define_function(&mut self, def: &Rc<FunctionDef>) {
        debug!(name = %def.name, params = def.params.len(), "defining function");
        self.env.define_function(Rc::clone(def));
    }

    /// Evaluates a conditional.
    ///
    /// The condition is tested for truthiness. Without an else branch, a falsy
    /// condition yields no value.
    fn eval_if_else(&mut self,
                    condition: &Expr,
                    then_branch: &Expr,
                    else_branch: Option<&Expr>,
                    line: usize)
                    -> EvalResult<Option<Value>> {
        let cond = self.eval_child(condition, line)?.is_truthy();

        if cond {
            self.eval(then_branch)
        } else if let Some(else_expr) = else_branch {
            self.eval(else_expr)
        } else {
            Ok(None)
        }
    }
}
