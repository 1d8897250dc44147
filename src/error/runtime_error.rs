#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name that is bound to a value rather than a function.
    NotAFunction {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Used a name bound to a function where a value was required.
    FunctionUsedAsValue {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function or lambda.
    ArgumentCountMismatch {
        /// The function name, or `Lambd` for lambda applications.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator was applied to an operand combination it does not support.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An operand produced no value (a definition, or an `if` without `else`
    /// whose condition was false).
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Nested calls exceeded the configured call depth.
    RecursionLimitExceeded {
        /// The configured maximum call depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Nested expression evaluations exceeded the configured depth.
    NestingLimitExceeded {
        /// The configured maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Variable not defined: '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Function not defined: '{name}'.")
            },
            Self::NotAFunction { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a function.")
            },
            Self::FunctionUsedAsValue { name, line } => write!(f,
                                                               "Error on line {line}: '{name}' is a function and cannot be used as a value."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: '{name}' expects {expected} argument(s), but {found} were given."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::MissingValue { line } => write!(f, "Error on line {line}: Value missing."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::RecursionLimitExceeded { limit, line } => write!(f,
                                                                   "Error on line {line}: Maximum call depth of {limit} exceeded."),
            Self::NestingLimitExceeded { limit, line } => write!(f,
                                                                 "Error on line {line}: Expressions nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for RuntimeError {}
