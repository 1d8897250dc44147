use crate::{error::ErrorKind, interpreter::lexer::Position};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the lexer's scan position at the moment the error
/// was detected.
pub enum ParseError {
    /// An unrecognized character became the current token.
    InvalidToken {
        /// The offending lexeme.
        lexeme:   String,
        /// Where the lexer stood when the token was reached.
        position: Position,
    },
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// What the grammar expected at this point.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Where the lexer stood when the token was reached.
        position: Position,
    },
    /// Found extra tokens after a complete statement.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:    String,
        /// Where the lexer stood when the token was reached.
        position: Position,
    },
    /// A boolean literal was used as an arithmetic operand.
    BooleanInArithmetic {
        /// Where the lexer stood when the operand was recognized.
        position: Position,
    },
    /// Expressions were nested, or operators chained, deeper than the parser
    /// accepts.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// Where the lexer stood when the limit was reached.
        position: Position,
    },
}

impl ParseError {
    /// Classifies the error as lexical, syntactic or static-semantic.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken { .. } => ErrorKind::Lexical,
            Self::UnexpectedToken { .. }
            | Self::UnexpectedTrailingTokens { .. }
            | Self::NestingTooDeep { .. } => ErrorKind::Syntactic,
            Self::BooleanInArithmetic { .. } => ErrorKind::StaticSemantic,
        }
    }

    /// Returns the scan position recorded with the error.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::InvalidToken { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::BooleanInArithmetic { position }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { lexeme, position } => {
                write!(f, "Error at {position}: Invalid token: '{lexeme}'.")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Error at {position}: Expected {expected}, found {found}.")
            },

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at {position}: Extra tokens after statement. Check your input: {token}"),

            Self::BooleanInArithmetic { position } => write!(f,
                                                             "Error at {position}: Cannot use boolean in arithmetic expression."),

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at {position}: Expression nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
