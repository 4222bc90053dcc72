//! Construction errors and the umbrella error type.
//!
//! Evaluation failures live in [`crate::evaluator::EvalError`]; this module
//! covers the checks done when a node is built, plus [`Error`] for callers
//! that mix both phases and want a single `?` target.

use crate::evaluator::EvalError;

/// A node was rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// Function calls are limited to `sqrt` and `abs`.
    #[error("unknown function `{0}` (expected `sqrt` or `abs`)")]
    UnknownFunction(String),

    /// Binary operators are limited to `+`, `-`, `/` and `*`.
    #[error("unknown binary operator `{0}`")]
    UnknownOperator(char),

    #[error("variable name must not be empty")]
    EmptyVariableName,
}

/// Public error type for all operations of the library.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),

    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvalError),
}
