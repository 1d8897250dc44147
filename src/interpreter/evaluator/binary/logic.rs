use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `&&` or `||` with short-circuiting.
    ///
    /// The left operand is always evaluated. The right operand is evaluated
    /// only when the left one does not decide the result: `&&` stops on a falsy
    /// left operand, `||` stops on a truthy one. The result is the operand
    /// value that decided it, not a coerced boolean, so `0 || 5` is `5`.
    ///
    /// Skipped operands are never evaluated, so errors they would raise do not
    /// occur.
    ///
    /// # Example
    /// ```
    /// use lambd::{get_result, interpreter::value::core::Value};
    ///
    /// // `x` is unbound but never evaluated.
    /// assert_eq!(get_result("False && x").unwrap(), Some(Value::Bool(false)));
    /// assert_eq!(get_result("True || x").unwrap(), Some(Value::Bool(true)));
    /// assert_eq!(get_result("0 || 5").unwrap(), Some(Value::Integer(5)));
    /// ```
    pub(crate) fn eval_logic(&mut self,
                             op: BinaryOperator,
                             left: &Expr,
                             right: &Expr,
                             line: usize)
                             -> EvalResult<Value> {
        let lhs = self.eval_child(left, line)?;

        let decided = match op {
            BinaryOperator::And => !lhs.is_truthy(),
            _ => lhs.is_truthy(),
        };

        if decided {
            Ok(lhs)
        } else {
            self.eval_child(right, line)
        }
    }
}
