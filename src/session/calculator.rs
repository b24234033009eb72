use crate::{
    error::ErrorKind,
    evaluate_expression,
    session::{format::format_result, keypad::Key},
};

/// Outcome of the most recent calculation.
///
/// The default value is the idle state: nothing calculated, no error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultState {
    /// The formatted result, present after a successful calculation.
    pub data:  Option<String>,
    /// The unformatted result, present after a successful calculation.
    pub value: Option<f64>,
    /// Why the last calculation failed, if it did.
    pub error: Option<ErrorKind>,
}

impl ResultState {
    /// Whether the display should show the generic error message.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Accumulates keypad input and evaluates it on demand.
///
/// ## Usage
///
/// ```
/// use keypad_calc::session::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.update_equation("7");
/// calc.update_equation(" x ");
/// calc.update_equation("6");
///
/// assert_eq!(calc.equation(), "7 x 6");
/// assert_eq!(calc.calculate().data.as_deref(), Some("42.00"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    equation: String,
    result:   ResultState,
}

impl Calculator {
    /// Creates a calculator with an empty equation and an idle result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The equation typed so far.
    #[must_use]
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// The outcome of the last calculation.
    #[must_use]
    pub const fn result(&self) -> &ResultState {
        &self.result
    }

    /// Appends keypad text to the equation verbatim.
    pub fn update_equation(&mut self, input: &str) {
        self.equation.push_str(input);
    }

    /// Removes the last input from the equation.
    ///
    /// An equation ending in a space ends in a padded operator such as
    /// `" + "`, so three characters are removed; otherwise one. Does nothing
    /// on an empty equation.
    pub fn delete_last_character(&mut self) {
        let count = if self.equation.ends_with(' ') { 3 } else { 1 };
        for _ in 0..count {
            if self.equation.pop().is_none() {
                break;
            }
        }
    }

    /// Empties the equation and resets the result to idle.
    pub fn clear(&mut self) {
        self.equation.clear();
        self.result = ResultState::default();
    }

    /// Evaluates the equation and records the outcome.
    ///
    /// Every failure kind ends in the same error state for display; the kind
    /// itself is kept in `ResultState::error`.
    pub fn calculate(&mut self) -> &ResultState {
        self.result = match evaluate_expression(&self.equation) {
            Ok(value) => ResultState { data:  Some(format_result(value)),
                                       value: Some(value),
                                       error: None, },
            Err(e) => {
                log::debug!("calculation of {:?} failed: {e}", self.equation);
                ResultState { data:  None,
                              value: None,
                              error: Some(e.kind()), }
            },
        };
        &self.result
    }

    /// Applies a single key press.
    ///
    /// # Example
    /// ```
    /// use keypad_calc::session::{Calculator, Key};
    ///
    /// let mut calc = Calculator::new();
    /// for key in [Key::Digit(9), Key::Divide, Key::Digit(0), Key::Equals] {
    ///     calc.press(key);
    /// }
    /// assert!(calc.result().is_error());
    /// ```
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Equals => {
                self.calculate();
            },
            Key::Delete => self.delete_last_character(),
            Key::Clear => self.clear(),
            _ => {
                if let Some(text) = key.input() {
                    self.update_equation(&text);
                }
            },
        }
    }
}
