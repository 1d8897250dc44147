use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// `Eof` and `Invalid` are never matched by the generated scanner; the
/// [`Lexer`] wrapper produces them for exhausted input and for unrecognized
/// characters.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    /// Integer literal tokens, such as `42`. A leading sign is attached by
    /// [`Lexer`] when the `-` is contextually a sign.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens: `True` or `False`.
    #[token("True", parse_bool)]
    #[token("False", parse_bool)]
    Bool(bool),
    /// `Defun`
    #[token("Defun")]
    Defun,
    /// `Lambd`
    #[token("Lambd")]
    Lambd,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// Statement separator.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// End of input. Returned forever once the source is exhausted.
    Eof,
    /// An unrecognized character (or an integer literal too large for
    /// `i64`), carrying the offending lexeme.
    Invalid(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Invalid(lexeme) => write!(f, "{lexeme}"),
            Self::Eof => write!(f, "end of input"),
            Self::NewLine => write!(f, "newline"),
            other => write!(f, "{}", other.symbol()),
        }
    }
}

impl Token {
    /// Returns the fixed spelling of keyword, operator and punctuation tokens.
    ///
    /// Tokens carrying a payload return a short description of their kind.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Identifier(_) => "identifier",
            Self::Defun => "Defun",
            Self::Lambd => "Lambd",
            Self::If => "if",
            Self::Else => "else",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Bang => "!",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::NewLine => "newline",
            Self::Eof => "end of input",
            Self::Invalid(_) => "invalid token",
        }
    }

    /// Returns `true` for the arithmetic operator tokens `+ - * / %`.
    #[must_use]
    pub const fn is_arithmetic_operator(&self) -> bool {
        matches!(self,
                 Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Percent)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newline tokens are produced.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A scan position: the line and byte offset the lexer has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// 1-based line number.
    pub line:   usize,
    /// Byte offset from the start of the source.
    pub offset: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, position {}", self.line, self.offset)
    }
}

/// Pull-based lexer over a source text.
///
/// Wraps the generated scanner and adds the parts of tokenization that depend
/// on context: a `-` directly followed by digits is folded into a negative
/// integer literal when it stands at the start of the input or follows
/// whitespace, `(` or another operator character. Anywhere else it remains
/// the binary minus operator.
///
/// # Example
/// ```
/// use lambd::interpreter::lexer::{Lexer, Token};
///
/// let tokens: Vec<Token> = Lexer::new("42--6").collect();
/// assert_eq!(tokens, vec![Token::Integer(42), Token::Minus, Token::Integer(-6)]);
///
/// let tokens: Vec<Token> = Lexer::new("x-1").collect();
/// assert_eq!(tokens,
///            vec![Token::Identifier("x".to_string()), Token::Minus, Token::Integer(1)]);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Returns the next token and advances past it.
    ///
    /// Once the source is exhausted, `Token::Eof` is returned on every call.
    /// Unrecognized input is returned as `Token::Invalid` rather than
    /// failing, so that the parser can report it with positional context.
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            return Token::Eof;
        };

        match result {
            Ok(Token::Minus) if self.minus_is_sign() => self.signed_integer(),
            Ok(token) => token,
            Err(()) => Token::Invalid(self.inner.slice().to_string()),
        }
    }

    /// Returns the current scan position, just past the last token produced.
    #[must_use]
    pub fn position(&self) -> Position {
        Position { line:   self.inner.extras.line,
                   offset: self.inner.span().end, }
    }

    /// Returns the full source text being scanned.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }

    /// Decides whether the `-` just scanned is the sign of an integer literal.
    ///
    /// The minus must be immediately followed by a digit and preceded by the
    /// start of input, whitespace, `(` or an operator character.
    fn minus_is_sign(&self) -> bool {
        let followed_by_digit = self.inner
                                    .remainder()
                                    .chars()
                                    .next()
                                    .is_some_and(|c| c.is_ascii_digit());
        if !followed_by_digit {
            return false;
        }

        let start = self.inner.span().start;
        match self.inner.source()[..start].chars().next_back() {
            None => true,
            Some(c) => c.is_whitespace() || c == '(' || is_operator_char(c),
        }
    }

    /// Consumes the digits after a sign and produces the negated literal.
    fn signed_integer(&mut self) -> Token {
        let start = self.inner.span().start;
        match self.inner.next() {
            Some(Ok(Token::Integer(n))) => Token::Integer(-n),
            _ => {
                let end = self.inner.span().end;
                Token::Invalid(self.inner.source()[start..end].to_string())
            },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, the end of input.
    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::Eof => None,
            token => Some(token),
        }
    }
}

/// Characters that begin an operator token.
const fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%' | '&' | '|' | '!' | '=' | '<' | '>')
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice (`True` or `False`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "True" => Some(true),
        "False" => Some(false),
        _ => None,
    }
}
