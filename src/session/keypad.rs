use std::str::FromStr;

/// A button on the calculator keypad.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    /// A digit button, `0` through `9`.
    Digit(u8),
    /// `.`
    Point,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `x`
    Multiply,
    /// `/`
    Divide,
    /// `=`, evaluates the equation.
    Equals,
    /// `DEL`, removes the last input.
    Delete,
    /// `AC`, clears everything.
    Clear,
}

impl Key {
    /// Returns the text this key appends to the equation, if any.
    ///
    /// Operator keys are padded with spaces on both sides, which is what lets
    /// a delete remove them as one unit.
    ///
    /// # Example
    /// ```
    /// use keypad_calc::session::Key;
    ///
    /// assert_eq!(Key::Digit(7).input().as_deref(), Some("7"));
    /// assert_eq!(Key::Multiply.input().as_deref(), Some(" x "));
    /// assert_eq!(Key::Equals.input(), None);
    /// ```
    #[must_use]
    pub fn input(self) -> Option<String> {
        let text = match self {
            Self::Digit(d) => return Some(d.to_string()),
            Self::Point => ".",
            Self::Add => " + ",
            Self::Subtract => " - ",
            Self::Multiply => " x ",
            Self::Divide => " / ",
            Self::Equals | Self::Delete | Self::Clear => return None,
        };
        Some(text.to_string())
    }
}

/// A label that does not name any keypad button.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown key '{0}'.")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    /// Parses a button label. Labels are matched case-insensitively; `*` is
    /// accepted for `x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_uppercase().as_str() {
            "." => Self::Point,
            "+" => Self::Add,
            "-" => Self::Subtract,
            "X" | "*" => Self::Multiply,
            "/" => Self::Divide,
            "=" => Self::Equals,
            "DEL" => Self::Delete,
            "AC" => Self::Clear,
            label => match label.as_bytes() {
                [d @ b'0'..=b'9'] => Self::Digit(d - b'0'),
                _ => return Err(UnknownKey(s.to_string())),
            },
        };
        Ok(key)
    }
}
