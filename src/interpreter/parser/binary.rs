use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a chain of logical operators.
    ///
    /// `&&` and `||` share one precedence level and associate to the left.
    ///
    /// Grammar: `boolean_expr := comparison_expr (("&&" | "||")
    /// comparison_expr)*`
    pub(crate) fn parse_boolean_expr(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_comparison()?;
        let mut chained = 0;

        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::And | BinaryOperator::Or)
        {
            self.descend()?;
            chained += 1;

            let line = self.line();
            self.advance()?;

            let right = self.parse_comparison()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        self.ascend(chained);
        Ok(left)
    }

    /// Parses relational and equality operators.
    ///
    /// Handles `<`, `>`, `<=`, `>=`, `==` and `!=`, left-associative.
    ///
    /// Grammar: `comparison_expr := arithmetic_expr (cmp_op
    /// arithmetic_expr)*`
    pub(crate) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_arithmetic()?;
        let mut chained = 0;

        while let Some(op) = token_to_binary_operator(self.current())
              && is_comparison_op(op)
        {
            self.descend()?;
            chained += 1;

            let line = self.line();
            self.advance()?;

            let right = self.parse_arithmetic()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        self.ascend(chained);
        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// A right-hand operand that is a boolean literal is rejected here, so
    /// `1 + True` fails before evaluation.
    ///
    /// Grammar: `arithmetic_expr := term (("+" | "-") term)*`
    pub(crate) fn parse_arithmetic(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        let mut chained = 0;

        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            self.descend()?;
            chained += 1;

            let line = self.line();
            self.advance()?;

            let right = self.parse_term()?;
            if matches!(right, Expr::Boolean(_)) {
                return Err(self.boolean_in_arithmetic());
            }

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        self.ascend(chained);
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative `*`, `/` and `%`.
    ///
    /// Grammar: `term := factor (("*" | "/" | "%") factor)*`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        let mut chained = 0;

        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op,
                          BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            self.descend()?;
            chained += 1;

            let line = self.line();
            self.advance()?;

            let right = self.parse_factor()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        self.ascend(chained);
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use lambd::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the comparison class.
///
/// # Example
/// ```
/// use lambd::{ast::BinaryOperator, interpreter::parser::binary::is_comparison_op};
///
/// assert!(is_comparison_op(BinaryOperator::Less));
/// assert!(is_comparison_op(BinaryOperator::NotEqual));
/// assert!(!is_comparison_op(BinaryOperator::And));
/// ```
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}
