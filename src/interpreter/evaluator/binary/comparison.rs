use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a comparison between two values.
    ///
    /// `==` and `!=` accept any pair of values and compare them numerically,
    /// reading `True` as `1` and `False` as `0`. The ordering operators `<`,
    /// `>`, `<=` and `>=` require two integers.
    ///
    /// # Errors
    /// `TypeError` if an ordering operator receives a boolean.
    ///
    /// # Example
    /// ```
    /// use lambd::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let v = Interpreter::eval_comparison(BinaryOperator::Equal,
    ///                                      &Value::Integer(1),
    ///                                      &Value::Bool(true),
    ///                                      1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// let v = Interpreter::eval_comparison(BinaryOperator::Equal,
    ///                                      &Value::Integer(2),
    ///                                      &Value::Bool(true),
    ///                                      1).unwrap();
    /// assert_eq!(v, Value::Bool(false));
    ///
    /// let v = Interpreter::eval_comparison(BinaryOperator::GreaterEqual,
    ///                                      &Value::Integer(5),
    ///                                      &Value::Integer(5),
    ///                                      1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        match op {
            Equal => return Ok(Value::Bool(left.numeric() == right.numeric())),
            NotEqual => return Ok(Value::Bool(left.numeric() != right.numeric())),
            _ => {},
        }

        let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
            return Err(RuntimeError::TypeError { details: format!("Cannot compare {} and {} with '{op}'",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line });
        };

        let result = match op {
            Less => a < b,
            Greater => a > b,
            LessEqual => a <= b,
            GreaterEqual => a >= b,
            _ => {
                return Err(RuntimeError::TypeError { details: format!("'{op}' is not a comparison operator"),
                                                     line });
            },
        };

        Ok(Value::Bool(result))
    }
}
