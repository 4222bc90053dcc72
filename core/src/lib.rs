//! Core of the `exprtree` expression library.
//!
//! Expressions are immutable trees built bottom-up from [`Number`],
//! [`Variable`], [`BinaryOperation`] and [`FunctionCall`] nodes. A tree can be
//! evaluated, rendered to text, or handed to a [`Transformer`] to build a new
//! tree (see [`CopyTree`] and [`FoldConstants`]).

pub mod errors;
pub mod evaluator;
pub mod expr;
pub mod syntax;
pub mod visitor;

pub use errors::{ConstructionError, Error};
pub use evaluator::EvalError;
pub use expr::{BinaryOperation, Expr, FunctionCall, Number, Variable};
pub use syntax::{BinaryOp, Function};
pub use visitor::{CopyTree, FoldConstants, Transformer};
