use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, ensure_finite},
};

/// Evaluates a scalar arithmetic operation on two already evaluated operands.
///
/// Division uses floating-point semantics, except that a divisor equal to
/// zero (positive or negative) is an error instead of an infinite or NaN
/// result. Every result must be finite.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Offset of the operator, used for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Example
/// ```
/// use keypad_calc::{
///     ast::BinaryOperator, error::RuntimeError,
///     interpreter::evaluator::binary::eval_binary_op,
/// };
///
/// assert_eq!(eval_binary_op(BinaryOperator::Div, 20.0, 8.0, 3).unwrap(), 2.5);
/// assert_eq!(eval_binary_op(BinaryOperator::Div, 1.0, -0.0, 3),
///            Err(RuntimeError::DivisionByZero { position: 3 }));
/// assert_eq!(eval_binary_op(BinaryOperator::Mul, f64::MAX, 2.0, 3),
///            Err(RuntimeError::Overflow { position: 3 }));
/// ```
pub fn eval_binary_op(op: BinaryOperator,
                      left: f64,
                      right: f64,
                      position: usize)
                      -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            left / right
        },
    };

    ensure_finite(result, position)
}
