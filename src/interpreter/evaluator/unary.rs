/// Evaluates arithmetic negation of an already evaluated operand.
///
/// Negating a finite value is always finite, so this cannot fail. The
/// position is only used for tracing.
///
/// # Example
/// ```
/// use keypad_calc::interpreter::evaluator::unary::eval_unary_minus;
///
/// assert_eq!(eval_unary_minus(5.0, 0), -5.0);
/// assert_eq!(eval_unary_minus(eval_unary_minus(3.0, 1), 0), 3.0);
/// ```
#[must_use]
pub fn eval_unary_minus(value: f64, position: usize) -> f64 {
    log::trace!("negating {value} at position {position}");
    -value
}
