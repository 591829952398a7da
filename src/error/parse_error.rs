use crate::{error::LexError, interpreter::lexer::TokenKind};

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The scanner rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// `eat` found a different token than the grammar requires.
    #[error("Error at offset {offset}: Expected {expected} but found {found}.")]
    UnexpectedToken {
        /// The token the grammar requires at this point.
        expected: TokenKind,
        /// The token actually present.
        found:    TokenKind,
        /// Where the offending token starts.
        offset:   usize,
    },
    /// An operand was required but the current token cannot start one.
    ///
    /// This also covers empty input and input ending right after an operator.
    #[error("Error at offset {offset}: Expected a number, a sign or '(' but found {found}.")]
    ExpectedFactor {
        /// The token actually present.
        found:  TokenKind,
        /// Where the offending token starts.
        offset: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at offset {offset}: Extra tokens after expression, starting with {found}.")]
    UnexpectedTrailingTokens {
        /// The first token that was not consumed.
        found:  TokenKind,
        /// Where that token starts.
        offset: usize,
    },
    /// Parentheses or sign operators are nested deeper than the parser allows.
    #[error("Error at offset {offset}: Expression is nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// Where the level that crossed the limit starts.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error refers to.
    ///
    /// # Example
    /// ```
    /// use quotient::interpreter::parser::parse;
    ///
    /// let error = parse("1 + * 2").unwrap_err();
    /// assert_eq!(error.offset(), 4);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex(error) => error.offset(),
            Self::UnexpectedToken { offset, .. }
            | Self::ExpectedFactor { offset, .. }
            | Self::UnexpectedTrailingTokens { offset, .. }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}
