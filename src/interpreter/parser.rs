/// Parser entry points and shared types.
///
/// Contains the `ParseResult` alias, the top-level `parse` function that
/// rejects empty and trailing input, and the nesting limit.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels of the
/// grammar.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, numeric literals and parenthesized groups.
pub mod unary;
