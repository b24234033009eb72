/// Formats a result for display: two decimals, grouped thousands.
///
/// Rounding follows Rust's `{:.2}` formatting. Non-finite values, which the
/// evaluator never produces, are rendered as-is.
///
/// # Example
/// ```
/// use keypad_calc::session::format_result;
///
/// assert_eq!(format_result(42.0), "42.00");
/// assert_eq!(format_result(1234.5), "1,234.50");
/// assert_eq!(format_result(-9876543.219), "-9,876,543.22");
/// assert_eq!(format_result(-0.004), "-0.00");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
