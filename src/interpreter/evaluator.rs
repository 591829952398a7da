/// Core evaluation logic.
///
/// Contains the post-order tree walk that dispatches on every expression
/// variant.
pub mod core;

/// Unary operator evaluation.
///
/// Implements the sign operators with overflow checking.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic for `+`, `-`, `*` and truncating
/// `/`, shared by the tree walk and the postfix stack machine.
pub mod binary;

pub use self::core::{EvalResult, evaluate};
