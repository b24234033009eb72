/// The keypad accumulator.
///
/// Defines `Calculator`, which collects keypad input into an equation string,
/// supports deleting and clearing, and evaluates the equation on demand into a
/// `ResultState`.
pub mod calculator;
/// Display formatting for results.
///
/// Renders a finite value with two decimals and comma thousands separators,
/// the way the calculator display shows it.
pub mod format;
/// Keypad buttons.
///
/// Defines the `Key` enum, the text each button appends to the equation, and
/// parsing of button labels.
pub mod keypad;

pub use calculator::{Calculator, ResultState};
pub use format::format_result;
pub use keypad::Key;
