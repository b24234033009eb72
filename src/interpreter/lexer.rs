use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the equation.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the calculator.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.5`, `.5` or `2.`.
    ///
    /// Any run of digits and dots is a single token, so `2..3` is one
    /// malformed number rather than two literals.
    #[regex(r"[0-9.]+", parse_number)]
    Number(Number),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`, and the keypad's `x` multiplication marker.
    #[token("*")]
    #[token("x")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, line breaks and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// A numeric literal together with the exact text it was read from.
#[derive(Debug, PartialEq, Clone)]
pub struct Number {
    /// The parsed value.
    pub value: f64,
    /// The literal as typed, e.g. `"2."` or `".50"`.
    pub text:  String,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number.text),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(Number)`: The value and its source text if the slice holds at
///   least one digit and at most one dot.
/// - `None`: Otherwise, which the lexer reports as an error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<Number> {
    let text = lex.slice();
    if text.matches('.').count() > 1 || !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = text.parse().ok()?;
    Some(Number { value,
                  text: text.to_string() })
}

/// Converts an equation into a list of tokens paired with their byte offsets.
///
/// Whitespace is skipped. Empty or whitespace-only input yields an empty
/// list; deciding that there is nothing to evaluate is left to the parser.
///
/// # Errors
/// - `ParseError::MalformedNumber` for runs such as `2..3` or a lone `.`.
/// - `ParseError::UnexpectedCharacter` for anything outside the alphabet.
///
/// # Example
/// ```
/// use keypad_calc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 x 3").unwrap();
/// assert_eq!(tokens[1], (Token::Star, 2));
/// assert!(tokenize("   ").unwrap().is_empty());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let slice = lexer.slice();
            if slice.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
                return Err(ParseError::MalformedNumber { text: slice.to_string(),
                                                         position });
            }
            return Err(ParseError::UnexpectedCharacter { token: slice.to_string(),
                                                         position });
        }
    }

    log::trace!("tokenized {:?} into {} tokens", source, tokens.len());
    Ok(tokens)
}
