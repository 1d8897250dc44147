use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary expression node.
    ///
    /// The operand must produce a value; see [`Interpreter::eval_unary`].
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                expr: &Expr,
                                line: usize)
                                -> EvalResult<Value> {
        let value = self.eval_child(expr, line)?;
        Ok(Self::eval_unary(op, &value))
    }

    /// Evaluates a unary operation on a value.
    ///
    /// `Not` negates the value's truthiness and always yields a boolean, so
    /// `!0` is `True` and `!5` is `False`.
    ///
    /// # Example
    /// ```
    /// use lambd::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::Bool(false));
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::Integer(0));
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: &Value) -> Value {
        match op {
            UnaryOperator::Not => Value::Bool(!value.is_truthy()),
        }
    }
}
