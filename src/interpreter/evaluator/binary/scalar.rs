use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::{floor_div, floor_mod},
};

impl Interpreter {
    /// Evaluates an arithmetic operation between two integers.
    ///
    /// Both operands must be integers; a boolean operand is a type error.
    /// `/` and `%` use floor semantics, so `-7 / 2` is `-4` and `-7 % 2` is
    /// `1`.
    ///
    /// # Errors
    /// - `TypeError` if either operand is a boolean.
    /// - `DivisionByZero` for `/` or `%` with a zero divisor.
    /// - `Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use lambd::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let v = Interpreter::eval_scalar_op(BinaryOperator::Div,
    ///                                     &Value::Integer(-7),
    ///                                     &Value::Integer(2),
    ///                                     1).unwrap();
    /// assert_eq!(v, Value::Integer(-4));
    ///
    /// let err = Interpreter::eval_scalar_op(BinaryOperator::Mod,
    ///                                       &Value::Integer(1),
    ///                                       &Value::Integer(0),
    ///                                       3).unwrap_err();
    /// assert_eq!(err, RuntimeError::DivisionByZero { line: 3 });
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
            return Err(RuntimeError::TypeError { details: format!("Cannot apply '{op}' to {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line });
        };
        let (a, b) = (*a, *b);

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div | Mod => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                if op == Div { floor_div(a, b) } else { floor_mod(a, b) }
            },
            _ => {
                return Err(RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator"),
                                                     line });
            },
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }
}
