use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, descend, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Only prefix `-` is supported. It binds tighter than `*` and `/` and is
/// right-associative, so `--3` is parsed as `-( -3 )`. A prefix `+` is not
/// part of the grammar and is rejected by [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::UnaryMinus`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        tokens.next();
        let depth = descend(depth, *position)?;
        let expr = parse_unary(tokens, depth)?;
        Ok(Expr::UnaryMinus { expr:     Box::new(expr),
                              position: *position, })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// - `UnexpectedEndOfInput` when an operand is missing at the end, as in
///   `2 +`.
/// - `UnexpectedToken` when an operator or `)` stands where an operand
///   belongs, as in `2 ++ 3` or `()`.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(number), position)) => Ok(Expr::Literal { value:    number.value,
                                                                      position: *position, }),
        Some((Token::LParen, position)) => parse_grouping(tokens, *position, depth),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the inside of a parenthesized group after its `(` was consumed.
///
/// # Errors
/// `ExpectedClosingParen`, pointing at the opening parenthesis, if the group
/// is not closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         open_position: usize,
                         depth: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let depth = descend(depth, open_position)?;
    let inner = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        _ => Err(ParseError::ExpectedClosingParen { position: open_position }),
    }
}
