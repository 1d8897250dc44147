use std::mem::discriminant;

use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Lexer, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed program: the top-level statements in source order.
pub type Program = Vec<Expr>;

/// How deep statements may nest and operators may chain within one
/// statement.
///
/// Every grammar rule that recurses, and every operator added to a chain,
/// counts one level, so the depth of any parsed tree stays below this bound.
pub const MAX_NESTING_DEPTH: usize = 200;

/// Recursive-descent parser over a pull-based [`Lexer`].
///
/// The parser holds exactly one token of lookahead, the current token.
/// Grammar rules are methods spread over the `parser` submodules, one method
/// per rule, each calling the next-higher-precedence rule first.
///
/// Grammar:
/// ```text
/// program         := { statement [NEWLINE] }
/// statement       := function_def | lambda_expr | if_else | boolean_expr
/// boolean_expr    := comparison_expr { ('&&' | '||') comparison_expr }
/// comparison_expr := arithmetic_expr { cmp_op arithmetic_expr }
/// arithmetic_expr := term { ('+' | '-') term }
/// term            := factor { ('*' | '/' | '%') factor }
/// factor          := INTEGER | BOOLEAN | '(' statement ')' | '!' factor
///                  | IDENTIFIER [ '(' arg_list ')' ]
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
    line:    usize,
    depth:   usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and pulls the first token from `lexer`.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let line = lexer.position().line;
        Self { lexer,
               current,
               line,
               depth: 0 }
    }

    /// Creates a parser over a fresh lexer for `source`.
    #[must_use]
    pub fn from_source(source: &'src str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parses the whole token stream into a sequence of top-level statements.
    ///
    /// Statements are separated by newlines; blank lines are skipped. Any
    /// token left over after a complete statement, other than a newline or
    /// the end of input, is an error.
    ///
    /// # Errors
    /// - `InvalidToken` if an unrecognized character is reached.
    /// - `UnexpectedToken` if the grammar is violated.
    /// - `UnexpectedTrailingTokens` if a statement is followed by more input
    ///   on the same line.
    /// - `BooleanInArithmetic` if a boolean literal is used as an arithmetic
    ///   operand.
    /// - `NestingTooDeep` if a statement nests deeper than
    ///   [`MAX_NESTING_DEPTH`].
    ///
    /// # Example
    /// ```
    /// use lambd::interpreter::parser::core::Parser;
    ///
    /// let program = Parser::from_source("Defun { add, (x, y) } x + y\nadd(5, 3)").parse()
    ///                                                                           .unwrap();
    /// assert_eq!(program.len(), 2);
    ///
    /// assert!(Parser::from_source("1 + 2 3").parse().is_err());
    /// ```
    pub fn parse(&mut self) -> ParseResult<Program> {
        let mut program = Vec::new();

        loop {
            while self.current == Token::NewLine {
                self.advance()?;
            }
            if self.current == Token::Eof {
                break;
            }

            let statement = self.parse_statement()?;
            trace!(line = statement.line_number(), %statement, "parsed statement");
            program.push(statement);

            match self.current {
                Token::NewLine | Token::Eof => {},
                _ => {
                    return Err(ParseError::UnexpectedTrailingTokens { token:    self.current
                                                                                    .to_string(),
                                                                      position: self.lexer
                                                                                    .position(), });
                },
            }
        }

        Ok(program)
    }

    /// Returns the current (lookahead) token.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }

    /// Returns the source line of the current token.
    pub(in crate::interpreter::parser) const fn line(&self) -> usize {
        self.line
    }

    /// Moves to the next token and returns the one that was current.
    ///
    /// The new current token is checked immediately: reaching an invalid
    /// token is an error at this point, not when a rule later inspects it.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token();
        self.line = self.lexer.position().line;
        if next == Token::NewLine {
            // The newline itself belongs to the line it terminates.
            self.line -= 1;
        }

        let previous = std::mem::replace(&mut self.current, next);

        if let Token::Invalid(lexeme) = &self.current {
            return Err(ParseError::InvalidToken { lexeme:   lexeme.clone(),
                                                  position: self.lexer.position(), });
        }

        Ok(previous)
    }

    /// Consumes the current token if it has the same kind as `expected`.
    ///
    /// Payloads are ignored when comparing, so `&Token::Integer(0)` accepts
    /// any integer literal.
    ///
    /// # Errors
    /// `InvalidToken` if the current token is invalid, otherwise
    /// `UnexpectedToken` when the kinds differ.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: &Token) -> ParseResult<Token> {
        if discriminant(&self.current) == discriminant(expected) {
            return self.advance();
        }

        Err(self.unexpected(expected.symbol()))
    }

    /// Builds the error for the current token not matching `expected`.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> ParseError {
        let position = self.lexer.position();

        match &self.current {
            Token::Invalid(lexeme) => ParseError::InvalidToken { lexeme: lexeme.clone(),
                                                                 position },
            token => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                   found: token.to_string(),
                                                   position },
        }
    }

    /// Builds a boolean-in-arithmetic error at the current position.
    pub(in crate::interpreter::parser) fn boolean_in_arithmetic(&self) -> ParseError {
        ParseError::BooleanInArithmetic { position: self.lexer.position() }
    }

    /// Enters one level of nesting.
    ///
    /// # Errors
    /// `NestingTooDeep` once [`MAX_NESTING_DEPTH`] levels are active.
    pub(in crate::interpreter::parser) fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                    position: self.lexer.position(), });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves `levels` levels of nesting entered with [`Parser::descend`].
    pub(in crate::interpreter::parser) const fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }
}
