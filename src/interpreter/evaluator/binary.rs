use crate::{
    ast::BinaryOperator,
    error::{Operation, RuntimeError},
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a binary arithmetic operation on two integers.
///
/// All operators use checked `i64` arithmetic. Division truncates toward
/// zero, so `-7 / 2` is `-3` and `7 / -2` is `-3`. Division by zero is
/// checked before the division itself.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] if `op` is `Div` and `right` is zero.
/// - [`RuntimeError::Overflow`] if the result does not fit in an `i64`,
///   including `i64::MIN / -1`.
///
/// # Example
/// ```
/// use quotient::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Mul, 6, 7), Ok(42));
/// assert_eq!(eval_binary(BinaryOperator::Div, -7, 2), Ok(-3));
/// assert_eq!(eval_binary(BinaryOperator::Div, 5, 0),
///            Err(RuntimeError::DivisionByZero));
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right)
        },
    };
    tracing::trace!("{left} {op} {right} = {result:?}");
    result.ok_or(RuntimeError::Overflow { operation: Operation::Binary(op) })
}
