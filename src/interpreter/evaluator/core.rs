use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns its integer value.
///
/// The walk is post-order: both operands of a binary operation are evaluated,
/// left first, before the operator is applied. The tree is only borrowed, so
/// evaluating the same tree again yields the same result.
///
/// Intermediate values live on a heap-allocated operand stack, so a long
/// left-folded chain such as `1 + 1 + ... + 1` does not grow the call stack.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] if a divisor evaluates to zero.
/// - [`RuntimeError::Overflow`] if an intermediate result does not fit in an
///   `i64`.
///
/// # Example
/// ```
/// use quotient::interpreter::{evaluator::evaluate, parser::parse};
///
/// let tree = parse("(2 + 3) * 5").unwrap();
/// assert_eq!(evaluate(&tree), Ok(25));
/// assert_eq!(evaluate(&tree), Ok(25));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    let mut values: Vec<i64> = Vec::new();
    for node in expr.post_order() {
        let value = match node {
            Expr::Number { value } => *value,
            Expr::UnaryOp { op, .. } => {
                let Some(operand) = values.pop() else {
                    unreachable!("post-order walk yields the operand before {op}")
                };
                eval_unary(*op, operand)?
            },
            Expr::BinaryOp { op, .. } => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    unreachable!("post-order walk yields both operands before {op}")
                };
                eval_binary(*op, left, right)?
            },
        };
        values.push(value);
    }
    let Some(value) = values.pop() else {
        unreachable!("post-order walk yields at least the root")
    };
    Ok(value)
}
