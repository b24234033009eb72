use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest allowed nesting of parentheses and unary signs.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses a complete token list into a single expression tree.
///
/// The whole list must form exactly one expression. Parsing is atomic: on
/// any error no partial tree is returned.
///
/// # Errors
/// - `ParseError::EmptyInput` if `tokens` is empty.
/// - `ParseError::UnexpectedTrailingTokens` if tokens remain after a complete
///   expression, for example an unmatched `)`.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use keypad_calc::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("(2 + 3) * 4").unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// assert_eq!(parse(&[]), Err(ParseError::EmptyInput));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing and for the inside of
/// parenthesized groups. It begins at the lowest-precedence level, addition,
/// and recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Current nesting depth of groups and unary signs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, depth)
}

/// Returns the depth one level below `depth`, or fails once the limit is
/// exceeded.
pub(crate) const fn descend(depth: usize, position: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(depth + 1)
}
