//! Transformer (visitor) protocol for building new trees from existing ones.
//!
//! A node's `transform` method picks *which* transformer method runs; the
//! transformer decides *what* gets built. Adding a new tree-to-tree
//! operation therefore needs no change to the node types.
//!
//! The output type is chosen by the transformer:
//! - `Expr` for infallible tree-to-tree transformations ([`CopyTree`])
//! - `Result<Expr, EvalError>` for transformations that evaluate eagerly
//!   ([`FoldConstants`])
//! - `Result<f64, EvalError>` for evaluation itself
//!   ([`Evaluator`](crate::evaluator::Evaluator))

mod copy;
mod fold;


pub use copy::CopyTree;
pub use fold::FoldConstants;

use crate::expr::{BinaryOperation, FunctionCall, Number, Variable};

/// One method per node kind, no defaults: every transformer handles all
/// four kinds exhaustively.
///
/// Implementations recurse into children themselves by calling
/// [`Expr::transform`](crate::Expr::transform) with `self`. They never
/// mutate or alias the input tree.
pub trait Transformer {
    /// The type of value produced by the transformation.
    type Output;

    fn transform_number(&mut self, number: &Number) -> Self::Output;

    fn transform_binary_operation(&mut self, binop: &BinaryOperation) -> Self::Output;

    fn transform_function_call(&mut self, call: &FunctionCall) -> Self::Output;

    fn transform_variable(&mut self, variable: &Variable) -> Self::Output;
}
