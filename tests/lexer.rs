use pretty_assertions::assert_eq;
use quotient::{
    error::LexError,
    interpreter::lexer::{Scanner, Token, TokenKind, tokenize},
};

#[test]
fn scans_every_token_kind() {
    let tokens = tokenize("(1 + 23) * 4 / -5").unwrap();
    assert_eq!(tokens,
               vec![(Token::LParen, 0),
                    (Token::Integer(1), 1),
                    (Token::Plus, 3),
                    (Token::Integer(23), 5),
                    (Token::RParen, 7),
                    (Token::Star, 9),
                    (Token::Integer(4), 11),
                    (Token::Slash, 13),
                    (Token::Minus, 15),
                    (Token::Integer(5), 16),
                    (Token::EndOfInput, 17)]);
}

#[test]
fn digit_runs_are_maximal() {
    let tokens = tokenize("007 1234567890").unwrap();
    assert_eq!(tokens,
               vec![(Token::Integer(7), 0),
                    (Token::Integer(1_234_567_890), 4),
                    (Token::EndOfInput, 14)]);
}

#[test]
fn end_of_input_repeats() {
    let mut scanner = Scanner::new("1");
    assert_eq!(scanner.next_token(), Ok((Token::Integer(1), 0)));
    for _ in 0..3 {
        assert_eq!(scanner.next_token(), Ok((Token::EndOfInput, 1)));
    }
}

#[test]
fn empty_and_blank_sources_end_immediately() {
    assert_eq!(tokenize(""), Ok(vec![(Token::EndOfInput, 0)]));
    assert_eq!(tokenize(" \t\n "), Ok(vec![(Token::EndOfInput, 4)]));
}

#[test]
fn no_negative_literals() {
    assert_eq!(tokenize("-3").unwrap(),
               vec![(Token::Minus, 0), (Token::Integer(3), 1), (Token::EndOfInput, 2)]);
}

#[test]
fn invalid_character_reports_position() {
    assert_eq!(tokenize("2 & 3"),
               Err(LexError::InvalidCharacter { character: '&',
                                                offset:    2, }));
    assert_eq!(tokenize("x"),
               Err(LexError::InvalidCharacter { character: 'x',
                                                offset:    0, }));
}

#[test]
fn invalid_multibyte_character_is_reported_whole() {
    let error = tokenize("1 + é").unwrap_err();
    assert_eq!(error,
               LexError::InvalidCharacter { character: 'é',
                                            offset:    4, });
}

#[test]
fn scanner_yields_tokens_before_an_error() {
    let mut scanner = Scanner::new("4 ?");
    assert_eq!(scanner.next_token(), Ok((Token::Integer(4), 0)));
    assert!(scanner.next_token().is_err());
}

#[test]
fn literal_too_large() {
    assert_eq!(tokenize("1 + 99999999999999999999"),
               Err(LexError::LiteralTooLarge { literal: "99999999999999999999".to_string(),
                                               offset:  4, }));
    assert_eq!(tokenize("9223372036854775807").unwrap()[0],
               (Token::Integer(i64::MAX), 0));
}

#[test]
fn kind_determines_value() {
    assert_eq!(Token::Integer(12).value(), Some(12));
    assert_eq!(Token::Integer(12).kind(), TokenKind::Integer);
    for token in [Token::Plus,
                  Token::Minus,
                  Token::Star,
                  Token::Slash,
                  Token::LParen,
                  Token::RParen,
                  Token::EndOfInput]
    {
        assert_eq!(token.value(), None);
    }
}

#[test]
fn tokens_display() {
    assert_eq!(Token::Integer(12).to_string(), "12");
    assert_eq!(Token::Star.to_string(), "'*'");
    assert_eq!(Token::EndOfInput.to_string(), "end of input");
}
