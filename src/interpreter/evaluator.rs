/// Binary operator evaluation logic.
///
/// Handles the four arithmetic operations, including the division-by-zero
/// check.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree walk, the result alias and the finiteness check shared by
/// every operation.
pub mod core;
