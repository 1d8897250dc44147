use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// The language has exactly two kinds of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A boolean value (`True` or `False`).
    /// Produced by comparison operators and `!`.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns the truthiness of the value.
    ///
    /// `False` and `0` are falsy; every other value is truthy. Conditions,
    /// `!`, `&&` and `||` all use this rule.
    ///
    /// # Example
    /// ```
    /// use lambd::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Bool(b) => *b,
        }
    }

    /// Converts the value to an `i64`, or returns an error if it is a boolean.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: If the value is an integer.
    /// - `Err(RuntimeError::TypeError)`: Otherwise.
    pub fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Bool(_) => Err(RuntimeError::TypeError { details: format!("Expected an integer, found boolean {self}"),
                                                           line }),
        }
    }

    /// Returns the numeric reading of the value used by `==` and `!=`.
    ///
    /// Integers are themselves; `True` is `1` and `False` is `0`.
    ///
    /// # Example
    /// ```
    /// use lambd::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(-4).numeric(), -4);
    /// assert_eq!(Value::Bool(true).numeric(), 1);
    /// assert_eq!(Value::Bool(false).numeric(), 0);
    /// ```
    #[must_use]
    pub fn numeric(&self) -> i64 {
        match self {
            Self::Integer(n) => *n,
            Self::Bool(b) => i64::from(*b),
        }
    }

    /// Returns the name of the value's kind, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
        }
    }
}
