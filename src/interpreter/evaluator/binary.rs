use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        output::Output,
    },
};

impl<O: Output> Context<O> {
    /// Evaluates a binary operation.
    ///
    /// The left operand is evaluated before the right one, so diagnostics
    /// appear in source order.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr)
                          -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        Ok(apply_binary(op, left, right))
    }
}

/// Applies an arithmetic operator to two floating values.
///
/// Division by zero is not an error: the dividend is divided by positive
/// zero, giving an infinity or `NaN`. A negative-zero divisor is treated as
/// positive zero.
///
/// # Example
/// ```
/// use linecalc::{ast::BinaryOperator, interpreter::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Sub, 7.0, 2.0), 5.0);
/// assert_eq!(apply_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
/// assert_eq!(apply_binary(BinaryOperator::Div, -1.0, 0.0), f64::NEG_INFINITY);
/// assert_eq!(apply_binary(BinaryOperator::Div, 1.0, -0.0), f64::INFINITY);
/// assert!(apply_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div if right == 0.0 => left / 0.0,
        BinaryOperator::Div => left / right,
    }
}
