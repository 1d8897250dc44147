use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a parenthesized, comma-separated argument list.
    ///
    /// Each argument is a full statement, so definitions, lambdas and
    /// conditionals may appear as arguments. `()` produces an empty list.
    ///
    /// Grammar: `"(" [ statement ("," statement)* ] ")"`
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - `(` is missing,
    /// - an argument fails to parse,
    /// - the closing `)` is missing.
    pub(in crate::interpreter::parser) fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        self.eat(&Token::LParen)?;

        let mut arguments = Vec::new();
        if self.current() != &Token::RParen {
            arguments.push(self.parse_statement()?);
            while self.current() == &Token::Comma {
                self.advance()?;
                arguments.push(self.parse_statement()?);
            }
        }

        self.eat(&Token::RParen)?;
        Ok(arguments)
    }

    /// Parses a possibly empty, comma-separated list of parameter names.
    ///
    /// The list ends at the first token that is not an identifier; the caller
    /// consumes the terminator (`)` for definitions, `.` for lambdas).
    ///
    /// Grammar: `[ IDENTIFIER ("," IDENTIFIER)* ]`
    pub(in crate::interpreter::parser) fn parse_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut params = Vec::new();

        if matches!(self.current(), Token::Identifier(_)) {
            params.push(self.parse_identifier()?);
            while self.current() == &Token::Comma {
                self.advance()?;
                params.push(self.parse_identifier()?);
            }
        }

        Ok(params)
    }

    /// Parses a plain identifier and returns its name.
    ///
    /// # Errors
    /// Returns a `ParseError` if the current token is not an identifier.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<String> {
        match self.current() {
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            },
            _ => Err(self.unexpected("identifier")),
        }
    }
}
