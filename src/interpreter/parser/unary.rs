use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: the operand of the multiplicative level.
    ///
    /// Sign operators are right-associative, so `- - 7` is parsed as
    /// `-(-(7))`. Parentheses restart the grammar at `expr` and leave no
    /// trace in the tree.
    ///
    /// Grammar:
    /// ```text
    ///     factor := INTEGER
    ///             | "(" expr ")"
    ///             | ("+" | "-") factor
    /// ```
    ///
    /// # Errors
    /// - [`ParseError::ExpectedFactor`] if the current token cannot start an
    ///   operand.
    /// - [`ParseError::UnexpectedToken`] if a `(` is not closed.
    /// - [`ParseError::NestingTooDeep`] past [`MAX_NESTING_DEPTH`] levels.
    pub(super) fn parse_factor(&mut self) -> ParseResult<Expr> {
        let (token, offset) = self.current_token();
        match token {
            Token::Integer(value) => {
                self.eat(TokenKind::Integer)?;
                Ok(Expr::number(value))
            },
            Token::LParen => self.nested(offset, |parser| {
                                     parser.eat(TokenKind::LParen)?;
                                     let expr = parser.parse_expression()?;
                                     parser.eat(TokenKind::RParen)?;
                                     Ok(expr)
                                 }),
            Token::Plus => self.parse_signed(UnaryOperator::Plus, offset),
            Token::Minus => self.parse_signed(UnaryOperator::Minus, offset),
            Token::Star | Token::Slash | Token::RParen | Token::EndOfInput => {
                Err(ParseError::ExpectedFactor { found: token.kind(),
                                                 offset })
            },
        }
    }

    /// Parses a sign operator followed by its operand.
    fn parse_signed(&mut self, op: UnaryOperator, offset: usize) -> ParseResult<Expr> {
        self.nested(offset, |parser| {
                let (token, _) = parser.current_token();
                parser.eat(token.kind())?;
                let expr = parser.parse_factor()?;
                Ok(Expr::unary(op, expr))
            })
    }

    /// Runs `rule` one nesting level deeper.
    fn nested(&mut self,
              offset: usize,
              rule: impl FnOnce(&mut Self) -> ParseResult<Expr>)
              -> ParseResult<Expr> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    offset });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}
