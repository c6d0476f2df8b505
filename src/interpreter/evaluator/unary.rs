use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        output::Output,
    },
};

impl<O: Output> Context<O> {
    /// Evaluates a unary operator applied to a subexpression.
    pub fn eval_unary_op(&mut self, op: UnaryOperator, expr: &Expr) -> EvalResult<f64> {
        let value = self.eval(expr)?;

        Ok(match op {
            UnaryOperator::Negate => -value,
        })
    }
}
