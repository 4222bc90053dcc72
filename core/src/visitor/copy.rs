use super::Transformer;
use crate::expr::{BinaryOperation, Expr, FunctionCall, Number, Variable};

/// Structural deep copy.
///
/// The result prints identically to the source and owns a disjoint set of
/// nodes, so either tree can be dropped without affecting the other.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyTree;

impl CopyTree {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for CopyTree {
    type Output = Expr;

    fn transform_number(&mut self, number: &Number) -> Expr {
        Number::new(number.value()).into()
    }

    fn transform_binary_operation(&mut self, binop: &BinaryOperation) -> Expr {
        let left = binop.left().transform(self);
        let right = binop.right().transform(self);
        BinaryOperation::new(left, binop.operation(), right).into()
    }

    fn transform_function_call(&mut self, call: &FunctionCall) -> Expr {
        let arg = call.arg().transform(self);
        FunctionCall::with_function(call.function(), arg).into()
    }

    fn transform_variable(&mut self, variable: &Variable) -> Expr {
        Expr::Variable(variable.clone())
    }
}
