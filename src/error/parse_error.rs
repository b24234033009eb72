#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The input held no tokens at all.
    #[error("Nothing to evaluate.")]
    EmptyInput,
    /// A character outside the calculator alphabet.
    #[error("Error at position {position}: Unexpected character '{token}'.")]
    UnexpectedCharacter {
        /// The offending text.
        token:    String,
        /// Byte offset in the input.
        position: usize,
    },
    /// A run of digits and dots that is not a number, such as `2..3`.
    #[error("Error at position {position}: Malformed number '{text}'.")]
    MalformedNumber {
        /// The text of the run.
        text:     String,
        /// Byte offset in the input.
        position: usize,
    },
    /// Found a token where an operand was expected.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset in the input.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Offset of the unmatched `(`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset in the input.
        position: usize,
    },
    /// Parentheses or signs nested beyond the supported depth.
    #[error("Error at position {position}: Expression is nested too deeply.")]
    NestingTooDeep {
        /// Byte offset where the limit was hit.
        position: usize,
    },
}
