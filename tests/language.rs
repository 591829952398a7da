use pretty_assertions::assert_eq;
use quotient::{
    calculate,
    error::{Error, LexError, ParseError, RuntimeError},
    infix_to_postfix,
    interpreter::{evaluator::evaluate, lexer::TokenKind, parser::parse},
};
use rstest::rstest;

fn assert_value(src: &str, expected: i64) {
    match calculate(src) {
        Ok(value) => assert_eq!(value, expected, "evaluating {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match calculate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3);
    assert_value("7 * 9", 63);
    assert_value("8 - 5", 3);
    assert_value("10 / 2", 5);
    assert_value("42", 42);
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 5", 17);
    assert_value("2 * 3 + 5", 11);
    assert_value("20 - 12 / 4", 17);
    assert_value("1 + 2 * 3 - 8 / 4", 5);
}

#[test]
fn left_associativity() {
    assert_value("8 - 3 - 2", 3);
    assert_value("64 / 8 / 2", 4);
    assert_value("2 * 9 / 4", 4);
    assert_value("9 / 4 * 2", 4);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 5", 25);
    assert_value("8 - (3 - 2)", 7);
    assert_value("((((7))))", 7);
    assert_value("7 + 3 * (10 / (12 / (3 + 1) - 1))", 22);
}

#[test]
fn unary_signs_nest() {
    assert_value("- - - 7", -7);
    assert_value("- - 7", 7);
    assert_value("+7", 7);
    assert_value("-+-7", 7);
    assert_value("-(2 + 3)", -5);
    assert_value("2 * -3", -6);
    assert_value("2 - -3", 5);
    assert_value("-+-(--(---7+++1)) + 3 * (10 / (12 / (3 + 1) - 1)) / (2 + 3) - 5 - 3", -11);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(calculate("2+3"), calculate(" 2  +   3 "));
    assert_value("\t2\n*\r\n3 ", 6);
    assert_value(" 40- 15 +1-13+ 2 ", 15);
    assert_value(" 30 +5 * 10  ", 80);
}

#[rstest]
#[case("7 / 2", 3)]
#[case("-7 / 2", -3)]
#[case("7 / -2", -3)]
#[case("-7 / -2", 3)]
#[case("1 / 3", 0)]
#[case("-1 / 3", 0)]
fn division_truncates_toward_zero(#[case] src: &str, #[case] expected: i64) {
    assert_value(src, expected);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("5 / 0"),
               Error::Runtime(RuntimeError::DivisionByZero));
    assert_eq!(assert_failure("1 / (3 - 3)"),
               Error::Runtime(RuntimeError::DivisionByZero));
}

#[test]
fn division_by_zero_only_when_evaluated() {
    assert!(parse("5 / 0").is_ok());
}

#[test]
fn overflow_is_error() {
    assert!(matches!(assert_failure("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure("3037000500 * 3037000500"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure("(-9223372036854775807 - 1) / -1"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure("-(-9223372036854775807 - 1)"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert_value("-9223372036854775807 - 1", i64::MIN);
}

#[test]
fn invalid_character_is_lex_error() {
    assert_eq!(assert_failure("2 & 3"),
               Error::Parse(ParseError::Lex(LexError::InvalidCharacter { character: '&',
                                                                         offset:    2, })));
    assert_eq!(assert_failure("1.5"),
               Error::Parse(ParseError::Lex(LexError::InvalidCharacter { character: '.',
                                                                         offset:    1, })));
}

#[test]
fn unbalanced_parenthesis_is_parse_error() {
    assert_eq!(assert_failure("(2 + 3"),
               Error::Parse(ParseError::UnexpectedToken { expected: TokenKind::RParen,
                                                          found:    TokenKind::EndOfInput,
                                                          offset:   6, }));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("2 +")]
#[case("* 2")]
#[case("()")]
#[case("2 3")]
#[case("2 + 3)")]
#[case("(2 + 3))")]
fn malformed_input_is_error(#[case] src: &str) {
    assert!(matches!(assert_failure(src), Error::Parse(_)));
}

#[test]
fn evaluation_is_idempotent() {
    let tree = parse("(5 + 3) * 12 / 3 - -4").unwrap();
    let first = evaluate(&tree);
    let second = evaluate(&tree);
    assert_eq!(first, Ok(36));
    assert_eq!(first, second);
}

#[test]
fn postfix_conversion() {
    assert_eq!(infix_to_postfix("2 + 3").unwrap(), "2 3 +");
    assert_eq!(infix_to_postfix("2 + 3 * 5").unwrap(), "2 3 5 * +");
    assert_eq!(infix_to_postfix("(5 + 3) * 12 / 3").unwrap(), "5 3 + 12 * 3 /");
    assert_eq!(infix_to_postfix("5 + ((1 + 2) * 4) - 3").unwrap(),
               "5 1 2 + 4 * + 3 -");
}

#[test]
fn postfix_conversion_reports_parse_errors() {
    assert!(matches!(infix_to_postfix("2 & 3"),
                     Err(Error::Parse(ParseError::Lex(_)))));
    assert!(matches!(infix_to_postfix("(1"), Err(Error::Parse(_))));
}

#[test]
fn errors_render_with_offsets() {
    assert_eq!(assert_failure("2 & 3").to_string(),
               "Error at offset 2: Invalid character '&'.");
    assert_eq!(assert_failure("(2 + 3").to_string(),
               "Error at offset 6: Expected ')' but found end of input.");
    assert_eq!(assert_failure("4 / 0").to_string(), "Error: Division by zero.");
}

#[test]
fn long_flat_chains_evaluate() {
    assert_value(&format!("1{}", " + 1".repeat(100_000)), 100_001);
    assert_value(&format!("0{}", " - 1".repeat(100_000)), -100_000);
    assert_value(&format!("7{}", " * 1 / 1".repeat(50_000)), 7);
}
