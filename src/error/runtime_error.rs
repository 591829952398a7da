use crate::ast::{BinaryOperator, UnaryOperator};

/// An arithmetic operation whose result does not fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// A binary operation.
    Binary(BinaryOperator),
    /// A unary operation.
    Unary(UnaryOperator),
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(op) => write!(f, "{op}"),
            Self::Unary(op) => write!(f, "unary {}", op.symbol()),
        }
    }
}

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error: Division by zero.")]
    DivisionByZero,
    /// Arithmetic operation overflowed.
    #[error("Error: Integer overflow while computing '{operation}'.")]
    Overflow {
        /// The operation that overflowed.
        operation: Operation,
    },
    /// A postfix operator found fewer operands on the stack than it needs.
    #[error("Error: Postfix operator is missing an operand.")]
    StackUnderflow,
    /// A postfix sequence did not reduce to exactly one value.
    #[error("Error: Postfix sequence left {count} values instead of one.")]
    UnconsumedOperands {
        /// The number of values left on the stack.
        count: usize,
    },
}
