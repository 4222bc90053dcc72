use tracing::{debug, trace};

use super::Transformer;
use crate::{
    evaluator::{EvalError, eval_binary, eval_function},
    expr::{BinaryOperation, Expr, FunctionCall, Number, Variable},
};

/// Constant folding.
///
/// Children are folded first. A node whose folded children are all
/// `Number`s is replaced by a `Number` holding its value; anything that
/// still contains a `Variable` is rebuilt over the folded children with the
/// same operator or function. Evaluation failures (division by zero,
/// negative `sqrt`) abort the fold instead of producing an infinite or NaN
/// literal.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldConstants;

impl FoldConstants {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for FoldConstants {
    type Output = Result<Expr, EvalError>;

    fn transform_number(&mut self, number: &Number) -> Self::Output {
        Ok(Number::new(number.value()).into())
    }

    fn transform_binary_operation(&mut self, binop: &BinaryOperation) -> Self::Output {
        let left = binop.left().transform(self)?;
        let right = binop.right().transform(self)?;
        let op = binop.operation();

        match (left.as_number(), right.as_number()) {
            (Some(l), Some(r)) => {
                let value = eval_binary(op, l, r)?;
                debug!(%op, left = l, right = r, value, "folded binary operation");
                Ok(Number::new(value).into())
            }
            _ => {
                trace!(%op, "binary operation depends on a variable, keeping it");
                Ok(BinaryOperation::new(left, op, right).into())
            }
        }
    }

    fn transform_function_call(&mut self, call: &FunctionCall) -> Self::Output {
        let arg = call.arg().transform(self)?;
        let function = call.function();

        match arg.as_number() {
            Some(a) => {
                let value = eval_function(function, a)?;
                debug!(%function, arg = a, value, "folded function call");
                Ok(Number::new(value).into())
            }
            None => {
                trace!(%function, "function argument depends on a variable, keeping it");
                Ok(FunctionCall::with_function(function, arg).into())
            }
        }
    }

    fn transform_variable(&mut self, variable: &Variable) -> Self::Output {
        Ok(Expr::Variable(variable.clone()))
    }
}
