use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`. Each operator
    /// folds the already-built tree into the left operand, so `8 - 3 - 2`
    /// becomes `(8 - 3) - 2`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(super) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let (token, _) = self.current_token();
            if let Some(op) = token_to_binary_operator(&token)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                self.eat(token.kind())?;
                let right = self.parse_multiplicative()?;
                left = Expr::binary(left, op, right);
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*` and `/`.
    ///
    /// The rule is: `multiplicative := factor (("*" | "/") factor)*`
    pub(super) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            let (token, _) = self.current_token();
            if let Some(op) = token_to_binary_operator(&token)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                self.eat(token.kind())?;
                let right = self.parse_factor()?;
                left = Expr::binary(left, op, right);
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that never act as a binary operator. `+` and `-`
/// map to `Add` and `Sub`; whether they are used as signs instead is decided
/// by the grammar position, not by the token.
///
/// # Example
/// ```
/// use quotient::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Integer(_) | Token::LParen | Token::RParen | Token::EndOfInput => None,
    }
}
