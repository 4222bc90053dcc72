//! Operator and function tags carried by tree nodes.

use core::fmt;
use core::str::FromStr;

use crate::errors::ConstructionError;

/// Binary operator of a [`BinaryOperation`](crate::BinaryOperation).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Div,
    Mul,
}

impl BinaryOp {
    /// The character used when rendering the operator.
    pub fn as_char(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Div => '/',
            BinaryOp::Mul => '*',
        }
    }
}

impl TryFrom<char> for BinaryOp {
    type Error = ConstructionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(BinaryOp::Add),
            '-' => Ok(BinaryOp::Sub),
            '/' => Ok(BinaryOp::Div),
            '*' => Ok(BinaryOp::Mul),
            other => Err(ConstructionError::UnknownOperator(other)),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The closed set of unary functions a [`FunctionCall`](crate::FunctionCall) may name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sqrt,
    Abs,
}

impl Function {
    pub fn as_str(self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
        }
    }
}

impl FromStr for Function {
    type Err = ConstructionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "sqrt" => Ok(Function::Sqrt),
            "abs" => Ok(Function::Abs),
            other => Err(ConstructionError::UnknownFunction(other.to_string())),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
