//! exprtree - immutable arithmetic expression trees
//!
//! # Overview
//!
//! Trees are built bottom-up from numbers, variables, binary operations
//! (`+ - / *`) and calls of `sqrt`/`abs`. Every tree can be:
//!
//! - evaluated to an `f64` (variables always evaluate to `0.0`)
//! - rendered as infix text without parentheses
//! - transformed into a new, disjoint tree through a [`Transformer`]
//!
//! # Quick Start
//!
//! ```
//! use exprtree::{BinaryOp, BinaryOperation, Expr, FoldConstants, FunctionCall, Number, Variable};
//!
//! // abs(var * sqrt(32 - 16))
//! let minus = BinaryOperation::new(Number::new(32.0), BinaryOp::Sub, Number::new(16.0));
//! let sqrt = FunctionCall::new("sqrt", minus)?;
//! let mult = BinaryOperation::new(Variable::new("var")?, BinaryOp::Mul, sqrt);
//! let tree: Expr = FunctionCall::new("abs", mult)?.into();
//!
//! assert_eq!(tree.print(), "abs(var*sqrt(32.000000-16.000000))");
//! assert_eq!(tree.evaluate()?, 0.0);
//!
//! let folded = tree.transform(&mut FoldConstants)?;
//! assert_eq!(folded.print(), "abs(var*4.000000)");
//! # Ok::<(), exprtree::Error>(())
//! ```
//!
//! # Writing a transformer
//!
//! Implement [`Transformer`] with one method per node kind. The output type
//! is up to the transformer; the built-in ones produce trees, but a
//! transformer may just as well compute a value:
//!
//! ```
//! use exprtree::{BinaryOperation, FunctionCall, Number, Transformer, Variable};
//!
//! struct Depth;
//!
//! impl Transformer for Depth {
//!     type Output = usize;
//!
//!     fn transform_number(&mut self, _: &Number) -> usize { 1 }
//!     fn transform_variable(&mut self, _: &Variable) -> usize { 1 }
//!     fn transform_function_call(&mut self, call: &FunctionCall) -> usize {
//!         1 + call.arg().transform(self)
//!     }
//!     fn transform_binary_operation(&mut self, binop: &BinaryOperation) -> usize {
//!         1 + binop.left().transform(self).max(binop.right().transform(self))
//!     }
//! }
//! ```

// Re-export the node types and their tags
pub use exprtree_core::expr::{self, BinaryOperation, Expr, FunctionCall, Number, Variable};
pub use exprtree_core::syntax::{BinaryOp, Function};

// Re-export transformers
pub use exprtree_core::visitor::{CopyTree, FoldConstants, Transformer};
pub use exprtree_core::evaluator::{self, Evaluator};

// Re-export errors
pub use exprtree_core::errors::{ConstructionError, Error};
pub use exprtree_core::evaluator::EvalError;
