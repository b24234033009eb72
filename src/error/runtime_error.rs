#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// A literal or an intermediate result was not a finite number.
    #[error("Error at position {position}: Result is too large to represent.")]
    Overflow {
        /// Byte offset of the node that produced the value.
        position: usize,
    },
}
