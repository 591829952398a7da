use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Result type used by the scanner.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the scanner.
/// Only [`Token::Integer`] carries a value; every other variant is fully
/// described by its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Integer(i64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// The end of the source. Returned forever once the input is exhausted.
    EndOfInput,
}

/// The payload-free classification of a [`Token`].
///
/// Used where only the shape of a token matters, such as in
/// [`Parser::eat`](crate::interpreter::parser::core::Parser::eat) and in
/// error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// The end of the source.
    EndOfInput,
}

impl Token {
    /// Returns the kind of the token.
    ///
    /// # Example
    /// ```
    /// use quotient::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(7).kind(), TokenKind::Integer);
    /// assert_eq!(Token::EndOfInput.kind(), TokenKind::EndOfInput);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the literal value for [`Token::Integer`], `None` otherwise.
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Integer => "integer",
                        Self::Plus => "'+'",
                        Self::Minus => "'-'",
                        Self::Star => "'*'",
                        Self::Slash => "'/'",
                        Self::LParen => "'('",
                        Self::RParen => "')'",
                        Self::EndOfInput => "end of input",
                    })
    }
}

/// Why the generated lexer rejected a slice of input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum LexingError {
    /// No rule matched the current character.
    #[default]
    InvalidCharacter,
    /// A digit run matched but overflowed `i64`.
    LiteralTooLarge,
}

/// The lexeme table driving the scanner.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexingError)]
#[logos(skip r"\s+")]
enum Lexeme {
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Integer(value) => Self::Integer(value),
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Star => Self::Star,
            Lexeme::Slash => Self::Slash,
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(LexingError::LiteralTooLarge)`: If the digits overflow an `i64`.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Result<i64, LexingError> {
    lex.slice()
       .parse()
       .map_err(|_| LexingError::LiteralTooLarge)
}

/// A lazy token source over a borrowed string.
///
/// Each call to [`Scanner::next_token`] skips whitespace, produces one token
/// paired with the byte offset where it starts, and advances past it.
///
/// # Example
/// ```
/// use quotient::interpreter::lexer::{Scanner, Token};
///
/// let mut scanner = Scanner::new(" 12 * (3");
/// assert_eq!(scanner.next_token().unwrap(), (Token::Integer(12), 1));
/// assert_eq!(scanner.next_token().unwrap(), (Token::Star, 4));
/// assert_eq!(scanner.next_token().unwrap(), (Token::LParen, 6));
/// assert_eq!(scanner.next_token().unwrap(), (Token::Integer(3), 7));
/// assert_eq!(scanner.next_token().unwrap(), (Token::EndOfInput, 8));
/// assert_eq!(scanner.next_token().unwrap(), (Token::EndOfInput, 8));
/// ```
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, Lexeme>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Lexeme::lexer(source) }
    }

    /// Returns the next token and its byte offset.
    ///
    /// Once the source is exhausted every call returns
    /// [`Token::EndOfInput`] positioned at the end of the source.
    ///
    /// # Errors
    /// - [`LexError::InvalidCharacter`] for a character outside the token
    ///   alphabet.
    /// - [`LexError::LiteralTooLarge`] for a digit run that overflows `i64`.
    pub fn next_token(&mut self) -> LexResult<(Token, usize)> {
        match self.lexer.next() {
            Some(Ok(lexeme)) => Ok((lexeme.into(), self.lexer.span().start)),
            Some(Err(LexingError::LiteralTooLarge)) => {
                Err(LexError::LiteralTooLarge { literal: self.lexer.slice().to_string(),
                                                offset:  self.lexer.span().start, })
            },
            Some(Err(LexingError::InvalidCharacter)) => {
                let offset = self.lexer.span().start;
                let character = self.lexer.source()[offset..].chars()
                                                             .next()
                                                             .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(LexError::InvalidCharacter { character,
                                                 offset })
            },
            None => Ok((Token::EndOfInput, self.lexer.source().len())),
        }
    }
}

/// Scans `source` to completion.
///
/// The returned list always ends with exactly one [`Token::EndOfInput`].
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use quotient::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("-4").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Minus, 0), (Token::Integer(4), 1), (Token::EndOfInput, 2)]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<(Token, usize)>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let (token, offset) = scanner.next_token()?;
        tokens.push((token, offset));
        if token == Token::EndOfInput {
            return Ok(tokens);
        }
    }
}
