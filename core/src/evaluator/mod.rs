//! Evaluation of expression trees to `f64`.
//!
//! ## Design Principles
//!
//! - **Never panic**: arithmetic failures surface as [`EvalError`]
//! - **No recovery**: the first failing subtree aborts the whole evaluation
//! - **No environment**: every [`Variable`](crate::Variable) evaluates to `0.0`
//!
//! ## Example
//!
//! ```
//! use exprtree_core::{evaluator, BinaryOp, BinaryOperation, Expr, Number};
//!
//! let expr: Expr = BinaryOperation::new(Number::new(32.0), BinaryOp::Div, Number::new(16.0)).into();
//! assert_eq!(evaluator::eval(&expr).unwrap(), 2.0);
//! ```

mod error;
mod eval;
mod operators;


pub use error::EvalError;
pub use eval::Evaluator;

pub(crate) use operators::{eval_binary, eval_function};

use crate::expr::Expr;

/// Evaluate an expression tree.
///
/// ## Returns
///
/// The numeric value, or the first [`EvalError`] hit during the
/// depth-first walk.
pub fn eval(expr: &Expr) -> Result<f64, EvalError> {
    expr.transform(&mut Evaluator::new())
}
