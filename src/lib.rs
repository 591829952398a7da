//! # quotient
//!
//! quotient is an integer arithmetic expression interpreter written in Rust.
//! It scans and parses expressions built from integers, `+ - * /`, sign
//! operators and parentheses, then either evaluates the tree or converts it
//! to postfix (reverse Polish) notation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::evaluate,
        parser::parse,
        postfix::{render_postfix, to_postfix},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator and the postfix emitter.
///
/// # Responsibilities
/// - Defines a closed set of node variants: numbers, unary and binary
///   operations.
/// - Renders trees as S-expressions for inspection.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing,
/// or evaluating an expression. Every error is a plain value carrying its kind
/// and, where relevant, the source offset, so callers can match on it.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source offsets and the expected and actual tokens.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and postfix
/// emission.
///
/// # Responsibilities
/// - Coordinates all core components: scanner, parser, evaluator and postfix
///   emitter.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and evaluates `source`, returning its integer value.
///
/// Division truncates toward zero.
///
/// # Errors
/// Returns an error if scanning, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quotient::{
///     calculate,
///     error::{Error, RuntimeError},
/// };
///
/// assert_eq!(calculate("2 + 3 * 5"), Ok(17));
/// assert_eq!(calculate("8 - 3 - 2"), Ok(3));
/// assert_eq!(calculate("- - - 7"), Ok(-7));
///
/// assert_eq!(calculate("5 / 0"),
///            Err(Error::Runtime(RuntimeError::DivisionByZero)));
/// ```
pub fn calculate(source: &str) -> Result<i64, Error> {
    let tree = parse(source)?;
    Ok(evaluate(&tree)?)
}

/// Parses `source` and returns its postfix form as space-separated text.
///
/// Sign operators are written as `neg` and `pos` after their operand.
///
/// # Errors
/// Returns an error if scanning or parsing fails.
///
/// # Examples
/// ```
/// use quotient::infix_to_postfix;
///
/// assert_eq!(infix_to_postfix("2 + 3 * 5").unwrap(), "2 3 5 * +");
/// assert_eq!(infix_to_postfix("5 + ((1 + 2) * 4) - 3").unwrap(),
///            "5 1 2 + 4 * + 3 -");
/// ```
pub fn infix_to_postfix(source: &str) -> Result<String, Error> {
    let tree = parse(source)?;
    Ok(render_postfix(&to_postfix(&tree)))
}
