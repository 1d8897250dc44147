use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor, the highest-precedence construct.
    ///
    /// Factors are:
    /// - integer and boolean literals
    /// - parenthesized statements
    /// - `!` applied to another factor
    /// - variables, and function calls when an identifier is directly
    ///   followed by `(`
    ///
    /// A boolean literal directly followed by an arithmetic operator is
    /// rejected, so `True + 1` fails before evaluation.
    ///
    /// Grammar:
    /// ```text
    ///     factor := INTEGER | BOOLEAN | "(" statement ")" | "!" factor
    ///             | IDENTIFIER [ "(" arg_list ")" ]
    /// ```
    /// # Returns
    /// The parsed [`Expr`] or a `ParseError` on failure.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current() {
            Token::Integer(n) => {
                let n = *n;
                self.advance()?;
                Ok(Expr::Number(n))
            },
            Token::Bool(value) => {
                let value = *value;
                self.advance()?;
                if self.current().is_arithmetic_operator() {
                    return Err(self.boolean_in_arithmetic());
                }
                Ok(Expr::Boolean(value))
            },
            Token::LParen => self.parse_grouping(),
            Token::Bang => {
                let line = self.line();
                self.advance()?;
                self.descend()?;
                let expr = self.parse_factor()?;
                self.ascend(1);
                Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                                   expr: Box::new(expr),
                                   line })
            },
            Token::Identifier(_) => self.parse_identifier_or_call(),
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parses a parenthesized statement. The parentheses leave no node behind.
    ///
    /// Grammar: `grouping := "(" statement ")"`
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.eat(&Token::LParen)?;
        let inner = self.parse_statement()?;
        self.eat(&Token::RParen)?;
        Ok(inner)
    }

    /// Parses a variable reference or a function call.
    ///
    /// An identifier directly followed by `(` is a call; its arguments are
    /// parsed as full statements.
    ///
    /// Grammar: `IDENTIFIER [ "(" arg_list ")" ]`
    fn parse_identifier_or_call(&mut self) -> ParseResult<Expr> {
        let line = self.line();
        let name = self.parse_identifier()?;

        if self.current() == &Token::LParen {
            let arguments = self.parse_arguments()?;
            return Ok(Expr::FunctionCall { name,
                                           arguments,
                                           line });
        }

        Ok(Expr::Variable { name, line })
    }
}
