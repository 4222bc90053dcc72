//! Binary operator and function implementations.

use crate::{
    evaluator::EvalError,
    syntax::{BinaryOp, Function},
};

/// Evaluate a binary operation on two floats.
///
/// Follows IEEE 754 semantics except for division by an exact zero, which
/// is an error instead of producing an infinity.
pub(crate) fn eval_binary(op: BinaryOp, left: f64, right: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            // Matches -0.0 as well.
            if right == 0.0 {
                Err(EvalError::DivisionByZero { dividend: left })
            } else {
                Ok(left / right)
            }
        }
    }
}

/// Apply a unary function to an evaluated argument.
pub(crate) fn eval_function(function: Function, arg: f64) -> Result<f64, EvalError> {
    match function {
        Function::Sqrt => {
            if arg < 0.0 {
                Err(EvalError::Domain {
                    function,
                    argument: arg,
                })
            } else {
                Ok(arg.sqrt())
            }
        }
        Function::Abs => Ok(arg.abs()),
    }
}
