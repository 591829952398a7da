use std::fmt;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::evaluator::{EvalResult, binary::eval_binary, unary::eval_unary},
};

/// One element of a postfix (reverse Polish) sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostfixItem {
    /// An integer pushed onto the operand stack.
    Operand(i64),
    /// Pops two operands and pushes the result.
    Binary(BinaryOperator),
    /// Pops one operand and pushes the result.
    Unary(UnaryOperator),
}

/// Binary operators render as their source symbol and unary operators as
/// `pos` / `neg`, so that a unary minus is never mistaken for subtraction.
impl fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Binary(op) => f.write_str(op.symbol()),
            Self::Unary(op) => f.write_str(op.marker()),
        }
    }
}

/// Linearizes a tree into postfix order.
///
/// Operands are emitted before the operator that consumes them: for a binary
/// node the left sequence, then the right sequence, then the operator. A
/// fresh sequence is allocated for every call.
///
/// # Example
/// ```
/// use quotient::{
///     ast::BinaryOperator,
///     interpreter::{
///         parser::parse,
///         postfix::{PostfixItem, to_postfix},
///     },
/// };
///
/// let tree = parse("2 - 1").unwrap();
/// assert_eq!(to_postfix(&tree),
///            vec![PostfixItem::Operand(2),
///                 PostfixItem::Operand(1),
///                 PostfixItem::Binary(BinaryOperator::Sub)]);
/// ```
#[must_use]
pub fn to_postfix(expr: &Expr) -> Vec<PostfixItem> {
    expr.post_order()
        .map(|node| match node {
            Expr::Number { value } => PostfixItem::Operand(*value),
            Expr::UnaryOp { op, .. } => PostfixItem::Unary(*op),
            Expr::BinaryOp { op, .. } => PostfixItem::Binary(*op),
        })
        .collect()
}

/// Joins a postfix sequence with single spaces.
///
/// # Example
/// ```
/// use quotient::interpreter::{
///     parser::parse,
///     postfix::{render_postfix, to_postfix},
/// };
///
/// let tree = parse("(5 + 3) * 12 / 3").unwrap();
/// assert_eq!(render_postfix(&to_postfix(&tree)), "5 3 + 12 * 3 /");
///
/// let tree = parse("-2 * 3").unwrap();
/// assert_eq!(render_postfix(&to_postfix(&tree)), "2 neg 3 *");
/// ```
#[must_use]
pub fn render_postfix(items: &[PostfixItem]) -> String {
    items.iter()
         .map(ToString::to_string)
         .collect::<Vec<_>>()
         .join(" ")
}

/// Evaluates a postfix sequence on an operand stack.
///
/// Uses the same checked arithmetic as
/// [`evaluate`](crate::interpreter::evaluator::evaluate), so for every tree
/// `eval_postfix(&to_postfix(&tree)) == evaluate(&tree)`.
///
/// # Errors
/// - [`RuntimeError::StackUnderflow`] if an operator finds too few operands.
/// - [`RuntimeError::UnconsumedOperands`] if the sequence does not reduce to
///   exactly one value.
/// - Any arithmetic error raised by the operators.
///
/// # Example
/// ```
/// use quotient::{
///     error::RuntimeError,
///     interpreter::postfix::{PostfixItem, eval_postfix},
/// };
///
/// let items = [PostfixItem::Operand(4), PostfixItem::Operand(2)];
/// assert_eq!(eval_postfix(&items),
///            Err(RuntimeError::UnconsumedOperands { count: 2 }));
/// ```
pub fn eval_postfix(items: &[PostfixItem]) -> EvalResult<i64> {
    let mut stack: Vec<i64> = Vec::new();

    for item in items {
        let value = match *item {
            PostfixItem::Operand(value) => value,
            PostfixItem::Unary(op) => {
                let operand = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                eval_unary(op, operand)?
            },
            PostfixItem::Binary(op) => {
                let right = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                let left = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                eval_binary(op, left, right)?
            },
        };
        stack.push(value);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(RuntimeError::UnconsumedOperands { count: rest.len() }),
    }
}
