//! Tree-walking evaluator, expressed as a [`Transformer`] whose output is a
//! number rather than a tree.

use tracing::debug;

use super::{
    EvalError,
    operators::{eval_binary, eval_function},
};
use crate::{
    expr::{BinaryOperation, FunctionCall, Number, Variable},
    visitor::Transformer,
};

/// Value every free variable evaluates to.
pub(crate) const VARIABLE_DEFAULT: f64 = 0.0;

/// Depth-first evaluator. Left operands are evaluated before right ones and
/// the first failure aborts the walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for Evaluator {
    type Output = Result<f64, EvalError>;

    fn transform_number(&mut self, number: &Number) -> Self::Output {
        Ok(number.value())
    }

    fn transform_binary_operation(&mut self, binop: &BinaryOperation) -> Self::Output {
        let left = binop.left().transform(self)?;
        let right = binop.right().transform(self)?;
        eval_binary(binop.operation(), left, right).inspect_err(|e| {
            debug!(op = %binop.operation(), left, right, error = %e, "binary operation failed");
        })
    }

    fn transform_function_call(&mut self, call: &FunctionCall) -> Self::Output {
        let arg = call.arg().transform(self)?;
        eval_function(call.function(), arg).inspect_err(|e| {
            debug!(function = %call.function(), arg, error = %e, "function call failed");
        })
    }

    fn transform_variable(&mut self, _variable: &Variable) -> Self::Output {
        Ok(VARIABLE_DEFAULT)
    }
}
