/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// equation. Parse errors include unknown characters, malformed numbers,
/// unbalanced parentheses, missing operands and empty input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while evaluating a parsed expression:
/// division by zero and non-finite results.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Coarse classification of an evaluation failure.
///
/// Callers that show a single generic message can ignore this; tests and
/// diagnostics use it to tell causes apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// There was nothing to evaluate.
    EmptyInput,
    /// The input was not a well-formed expression.
    Syntax,
    /// A division had a zero divisor.
    DivisionByZero,
    /// A value or result was not finite.
    Overflow,
}

/// Any failure of the lex, parse and evaluate pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    /// Lexing or parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of a well-formed tree failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl EvaluationError {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use keypad_calc::{error::ErrorKind, evaluate_expression};
    ///
    /// let err = evaluate_expression("5 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::EmptyInput) => ErrorKind::EmptyInput,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::Overflow { .. }) => ErrorKind::Overflow,
        }
    }
}
