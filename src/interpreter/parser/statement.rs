use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a function definition (`Defun`)
    /// - an applied lambda (`Lambd`)
    /// - a conditional (`if`)
    /// - a boolean expression
    ///
    /// The leading keyword decides; anything else is parsed as a boolean
    /// expression.
    ///
    /// Grammar: `statement := function_def | lambda_expr | if_else |
    /// boolean_expr`
    ///
    /// Each statement counts one level towards the nesting limit.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Expr> {
        self.descend()?;
        let statement = match self.current() {
            Token::Defun => self.parse_function_def(),
            Token::Lambd => self.parse_lambda(),
            Token::If => self.parse_if_else(),
            _ => self.parse_boolean_expr(),
        }?;
        self.ascend(1);
        Ok(statement)
    }

    /// Parses a named function definition.
    ///
    /// Syntax:
    /// ```text
    ///     Defun { <name>, (<param>, ...) } <statement>
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedToken` if any delimiter, the name or a parameter is
    ///   missing.
    /// - Propagates any errors from parsing the body.
    fn parse_function_def(&mut self) -> ParseResult<Expr> {
        let line = self.line();
        self.eat(&Token::Defun)?;
        self.eat(&Token::LBrace)?;

        let name = self.parse_identifier()?;
        self.eat(&Token::Comma)?;

        self.eat(&Token::LParen)?;
        let params = self.parse_parameters()?;
        self.eat(&Token::RParen)?;

        self.eat(&Token::RBrace)?;

        let body = self.parse_statement()?;

        Ok(Expr::FunctionDef(Rc::new(FunctionDef { name,
                                                   params,
                                                   body,
                                                   line })))
    }

    /// Parses a lambda together with the arguments it is applied to.
    ///
    /// Syntax:
    /// ```text
    ///     Lambd <param>, ... . <statement> (<argument>, ...)
    /// ```
    /// A lambda is never stored; it is always applied where it appears.
    /// A body ending in a bare identifier must be parenthesized, otherwise the
    /// argument list is read as a call of that identifier.
    fn parse_lambda(&mut self) -> ParseResult<Expr> {
        let line = self.line();
        self.eat(&Token::Lambd)?;

        let params = self.parse_parameters()?;
        self.eat(&Token::Dot)?;

        let body = self.parse_statement()?;
        let arguments = self.parse_arguments()?;

        Ok(Expr::Lambda { params,
                          arguments,
                          body: Box::new(body),
                          line })
    }

    /// Parses a conditional with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if (<boolean_expr>) { <statement> }
    ///     if (<boolean_expr>) { <statement> } else { <statement> }
    /// ```
    fn parse_if_else(&mut self) -> ParseResult<Expr> {
        let line = self.line();
        self.eat(&Token::If)?;

        self.eat(&Token::LParen)?;
        let condition = self.parse_boolean_expr()?;
        self.eat(&Token::RParen)?;

        let then_branch = self.parse_braced()?;

        let else_branch = if self.current() == &Token::Else {
            self.advance()?;
            Some(Box::new(self.parse_braced()?))
        } else {
            None
        };

        Ok(Expr::IfElse { condition: Box::new(condition),
                          then_branch: Box::new(then_branch),
                          else_branch,
                          line })
    }

    /// Parses `{ <statement> }`.
    fn parse_braced(&mut self) -> ParseResult<Expr> {
        self.eat(&Token::LBrace)?;
        let statement = self.parse_statement()?;
        self.eat(&Token::RBrace)?;
        Ok(statement)
    }
}
