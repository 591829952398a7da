/// Represents all errors that can occur while scanning source text.
///
/// Offsets are byte offsets into the source string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that does not belong to the token alphabet.
    #[error("Error at offset {offset}: Invalid character {character:?}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character starts.
        offset:    usize,
    },
    /// A digit run too large to be represented as an `i64`.
    #[error("Error at offset {offset}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits as written in the source.
        literal: String,
        /// Where the literal starts.
        offset:  usize,
    },
}

impl LexError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::InvalidCharacter { offset, .. } | Self::LiteralTooLarge { offset, .. } => *offset,
        }
    }
}
