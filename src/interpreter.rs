/// The evaluator module executes expression trees and computes results.
///
/// The evaluator walks the AST bottom-up, performs arithmetic, and produces a
/// single finite number. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates literals, negation and the four binary operations.
/// - Reports division by zero as an error instead of an infinite result.
/// - Reports non-finite values as overflow.
pub mod evaluator;
/// The lexer module tokenizes an equation for further parsing.
///
/// The lexer reads the raw text and produces a list of tokens: numbers,
/// operators and parentheses, each paired with its byte offset. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Skips whitespace.
/// - Normalizes the keypad's `x` multiplication marker to `*`.
/// - Reports unknown characters and malformed numbers.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token list produced by the lexer and constructs
/// an AST honoring operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates grammar, reporting the first error with its position.
/// - Distinguishes empty input from malformed input.
pub mod parser;
