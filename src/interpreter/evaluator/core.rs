use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{binary::eval_binary_op, unary::eval_unary_minus},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns its numeric value.
///
/// The walk is post-order: both operands of a binary operation are evaluated
/// before they are combined, left first. Evaluation stops at the first
/// error. No rounding is applied.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` when a divisor evaluates to zero.
/// - `RuntimeError::Overflow` when a literal or any intermediate result is
///   not finite.
///
/// # Example
/// ```
/// use keypad_calc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let expr = Expr::BinaryOp { left:     Box::new(Expr::Literal { value:    1.5,
///                                                                position: 0, }),
///                             op:       BinaryOperator::Mul,
///                             right:    Box::new(Expr::Literal { value:    2.0,
///                                                                position: 6, }),
///                             position: 4, };
///
/// assert_eq!(evaluate(&expr).unwrap(), 3.0);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Literal { value, position } => ensure_finite(*value, *position),
        Expr::UnaryMinus { expr, position } => {
            let value = evaluate(expr)?;
            Ok(eval_unary_minus(value, *position))
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary_op(*op, left, right, *position)
        },
    }
}

/// Passes `value` through if it is finite.
///
/// # Errors
/// `RuntimeError::Overflow` for infinities and NaN.
pub(crate) fn ensure_finite(value: f64, position: usize) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RuntimeError::Overflow { position })
    }
}
