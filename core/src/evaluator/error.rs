//! Evaluation errors.
//!
//! Evaluation is pure arithmetic over `f64`, so only two things can go wrong:
//! dividing by an exact zero and taking the square root of a negative
//! number. Everything else follows IEEE 754 (overflow to infinity, NaN
//! propagation) and is not an error.

use crate::syntax::Function;

/// Error raised by `evaluate` or by a folding transform.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// Division whose right operand evaluated to exactly `0.0`.
    #[error("Division by zero ({dividend} / 0)")]
    DivisionByZero { dividend: f64 },

    /// Argument outside the domain of the function (negative `sqrt`).
    #[error("Domain error: {function}({argument}) is undefined")]
    Domain { function: Function, argument: f64 },
}
