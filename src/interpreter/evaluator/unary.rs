use crate::{
    ast::UnaryOperator,
    error::{Operation, RuntimeError},
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Plus`: returns the operand unchanged.
/// - `Minus`: numeric negation. Negating `i64::MIN` overflows.
///
/// # Example
/// ```
/// use quotient::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Minus, 5), Ok(-5));
/// assert_eq!(eval_unary(UnaryOperator::Plus, -5), Ok(-5));
/// assert!(eval_unary(UnaryOperator::Minus, i64::MIN).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: i64) -> EvalResult<i64> {
    let result = match op {
        UnaryOperator::Plus => Some(value),
        UnaryOperator::Minus => value.checked_neg(),
    };
    tracing::trace!("{} {value} = {result:?}", op.marker());
    result.ok_or(RuntimeError::Overflow { operation: Operation::Unary(op) })
}
