/// Parser state, entry points and token consumption.
///
/// Holds the [`core::Parser`] type with its single token of lookahead, the
/// `eat` primitive, and the top-level `expr` rule.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels as
/// left-folding loops.
pub mod binary;

/// Unary and atomic parsing.
///
/// Implements the `factor` rule: integer literals, parenthesized
/// expressions and prefix sign operators.
pub mod unary;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, Parser, parse};
