use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Scanner, Token, TokenKind},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// The deepest chain of parentheses and sign operators the parser accepts.
///
/// Only `factor` recurses, so this bounds the parser's own stack usage.
/// Binary chains are folded in a loop and add no nesting, however long they
/// are. The tree walks keep their work on the heap and need no bound.
pub const MAX_NESTING_DEPTH: usize = 128;

/// A recursive-descent parser over a lazily scanned token stream.
///
/// The parser holds exactly one token of lookahead, the current token, and
/// pulls the next one from its [`Scanner`] only when the current one is
/// consumed through [`Parser::eat`]. No rule ever backtracks.
///
/// Grammar:
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := INTEGER
///             | "(" expr ")"
///             | ("+" | "-") factor
/// ```
pub struct Parser<'src> {
    scanner:          Scanner<'src>,
    current:          Token,
    offset:           usize,
    pub(super) depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token of `source`.
    ///
    /// # Errors
    /// Returns [`ParseError::Lex`] if the first token cannot be scanned.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut scanner = Scanner::new(source);
        let (current, offset) = scanner.next_token()?;
        Ok(Self { scanner,
                  current,
                  offset,
                  depth: 0 })
    }

    /// Returns the current lookahead token and its byte offset.
    #[must_use]
    pub const fn current_token(&self) -> (Token, usize) {
        (self.current, self.offset)
    }

    /// Consumes the current token if it has the `expected` kind.
    ///
    /// On success the next token is requested from the scanner and becomes
    /// the new lookahead.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedToken`] if the current token has another
    ///   kind. Nothing is consumed.
    /// - [`ParseError::Lex`] if the following token cannot be scanned.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<()> {
        if self.current.kind() != expected {
            return Err(ParseError::UnexpectedToken { expected,
                                                     found: self.current.kind(),
                                                     offset: self.offset });
        }
        tracing::trace!("eat {} at {}", self.current, self.offset);
        let (next, offset) = self.scanner.next_token()?;
        self.current = next;
        self.offset = offset;
        Ok(())
    }

    /// Parses a complete source: one expression followed by end of input.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedTrailingTokens`] if tokens remain after the
    ///   expression.
    /// - Any error raised by [`Parser::parse_expression`].
    pub fn parse(mut self) -> ParseResult<Expr> {
        let span = tracing::trace_span!("parse");
        let _entered = span.enter();

        let expr = self.parse_expression()?;
        if self.current != Token::EndOfInput {
            return Err(ParseError::UnexpectedTrailingTokens { found:  self.current.kind(),
                                                              offset: self.offset, });
        }
        tracing::trace!("accepted {expr}");
        Ok(expr)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point of the grammar. It begins at the
    /// lowest-precedence level, addition, and recursively descends through
    /// the precedence hierarchy. Tokens after the expression are left
    /// unconsumed; see [`Parser::current_token`].
    ///
    /// Grammar: `expr := additive`
    ///
    /// # Errors
    /// Returns the first lexical or syntactic error encountered.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive()
    }
}

/// Parses `source` into a syntax tree, requiring the whole input to be
/// consumed.
///
/// # Errors
/// Returns the first [`ParseError`] encountered, including lexical errors.
///
/// # Example
/// ```
/// use quotient::{
///     error::ParseError,
///     interpreter::{lexer::TokenKind, parser::parse},
/// };
///
/// assert_eq!(parse("8 - 3 - 2").unwrap().to_string(), "(- (- 8 3) 2)");
///
/// assert_eq!(parse("(2 + 3"),
///            Err(ParseError::UnexpectedToken { expected: TokenKind::RParen,
///                                              found:    TokenKind::EndOfInput,
///                                              offset:   6, }));
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    Parser::new(source)?.parse()
}
