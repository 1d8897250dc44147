/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a tree:
/// invalid tokens surfaced by the lexer, syntax mistakes, and the
/// boolean-in-arithmetic checks performed during parsing.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown names, arity mismatches, unsupported operand
/// combinations, division by zero and exhausted call depth.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The kind of failure, independent of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unrecognized character reached the parser as an invalid token.
    Lexical,
    /// An unexpected token, trailing input after a complete program, or
    /// nesting beyond what the parser accepts.
    Syntactic,
    /// A boolean operand used in an arithmetic context, caught while parsing.
    StaticSemantic,
    /// A failure while evaluating a well-formed tree.
    Runtime,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Lexical => "lexical",
            Self::Syntactic => "syntactic",
            Self::StaticSemantic => "static-semantic",
            Self::Runtime => "runtime",
        };
        write!(f, "{kind}")
    }
}

#[derive(Debug)]
/// Any error produced by the lexer → parser → interpreter pipeline.
pub enum Error {
    /// Lexing or parsing failed.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use lambd::{error::ErrorKind, get_result};
    ///
    /// assert_eq!(get_result("True + 1").unwrap_err().kind(), ErrorKind::StaticSemantic);
    /// assert_eq!(get_result("x + 1").unwrap_err().kind(), ErrorKind::Runtime);
    /// assert_eq!(get_result("3 $ 4").unwrap_err().kind(), ErrorKind::Lexical);
    /// assert_eq!(get_result("(1 + 2").unwrap_err().kind(), ErrorKind::Syntactic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(_) => ErrorKind::Runtime,
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
