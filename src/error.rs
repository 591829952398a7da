/// Lexical errors.
///
/// Raised by the scanner when the source contains a character outside the
/// token alphabet or an integer literal that does not fit in an `i64`.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// mismatched tokens, missing operands, trailing input and excessive nesting.
/// Lexical errors reach callers of the parser wrapped in [`ParseError::Lex`].
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a tree or a
/// postfix sequence, such as division by zero or integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::{Operation, RuntimeError};

/// Any failure produced by the crate-level entry points.
///
/// [`crate::calculate`] and [`crate::infix_to_postfix`] run the whole
/// pipeline and report whichever phase failed first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Parse(ParseError::Lex(error))
    }
}
