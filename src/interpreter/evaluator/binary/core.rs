use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary expression node.
    ///
    /// `&&` and `||` go to [`Interpreter::eval_logic`] unevaluated so the
    /// right operand can be skipped. For every other operator both operands
    /// are evaluated left to right and combined by
    /// [`Interpreter::eval_binary`].
    ///
    /// # Errors
    /// `MissingValue` if an operand produces nothing, plus any error raised by
    /// the operands or the operator itself.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.eval_logic(op, left, right, line);
        }

        let lhs = self.eval_child(left, line)?;
        let rhs = self.eval_child(right, line)?;
        Self::eval_binary(op, &lhs, &rhs, line)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators are handled by `eval_scalar_op`, equality and
    /// ordering by `eval_comparison`. `&&` and `||` decide whether their right
    /// operand is evaluated at all, so they are not accepted here and are
    /// handled on the unevaluated operands instead.
    ///
    /// # Errors
    /// `TypeError` for `&&` and `||`, plus any error from the operator.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use lambd::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Less, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::And, &left, &right, 1);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right, line),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            And | Or => {
                Err(RuntimeError::TypeError { details: format!("'{op}' is not a binary value operator"),
                                              line })
            },
        }
    }
}
