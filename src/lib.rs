//! # keypad-calc
//!
//! keypad-calc is the arithmetic engine behind a keypad calculator.
//! It tokenizes, parses and evaluates infix expressions with operator
//! precedence, unary minus and decimal numbers, and reports division by zero,
//! overflow, empty input and malformed input as distinct errors.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvaluationError,
    interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a tree. The AST is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines literal, binary and unary-minus nodes.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating an equation, and the `ErrorKind` classification callers and
/// tests use to tell causes apart.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Attaches source positions for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the lex, parse and evaluate pipeline.
///
/// This module ties together the three stages of interpretation. Each call is
/// independent: no state survives between evaluations.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// A headless calculator session built on the pipeline.
///
/// Collects keypad input, evaluates it on demand and formats the result for
/// display.
pub mod session;

/// Evaluates an equation and returns its value.
///
/// The text is tokenized, parsed and evaluated in turn; the first failure
/// ends the call and no partial result is returned. The function is pure, so
/// evaluating the same text twice gives the same result.
///
/// # Errors
/// Returns an [`EvaluationError`] whose [`kind`](EvaluationError::kind) is
/// `EmptyInput`, `Syntax`, `DivisionByZero` or `Overflow`.
///
/// # Examples
/// ```
/// use keypad_calc::{error::ErrorKind, evaluate_expression};
///
/// assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("2 x 3").unwrap(), 6.0);
///
/// let err = evaluate_expression("(2 + 3").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Syntax);
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, EvaluationError> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens)?;
    let value = evaluate(&expr)?;

    log::debug!("evaluated {source:?} to {value}");
    Ok(value)
}
