//! Expression tree nodes.
//!
//! [`Expr`] is the closed sum of the four node kinds. Each node exclusively
//! owns its children through a `Box`, so a tree is a strict composite: no
//! sharing, no cycles, and dropping the root releases every descendant once.
//! Nodes are immutable after construction.

use core::fmt;

use crate::{
    errors::ConstructionError,
    evaluator::{EvalError, Evaluator},
    syntax::{BinaryOp, Function},
    visitor::Transformer,
};


/// An arithmetic expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(Number),
    BinaryOperation(BinaryOperation),
    FunctionCall(FunctionCall),
    Variable(Variable),
}

/// Numeric literal. Any `f64` is accepted, including NaN and infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    value: f64,
}

/// Free variable, identified by a non-empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
}

/// `left <op> right`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperation {
    left: Box<Expr>,
    op: BinaryOp,
    right: Box<Expr>,
}

/// Single-argument call of `sqrt` or `abs`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    function: Function,
    arg: Box<Expr>,
}

impl Number {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Variable {
    /// Create a variable. The name is free-form text but must not be empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConstructionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConstructionError::EmptyVariableName);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl BinaryOperation {
    pub fn new(left: impl Into<Expr>, op: BinaryOp, right: impl Into<Expr>) -> Self {
        Self {
            left: Box::new(left.into()),
            op,
            right: Box::new(right.into()),
        }
    }

    /// Build from an operator character (`+`, `-`, `/` or `*`).
    pub fn from_char(
        left: impl Into<Expr>,
        op: char,
        right: impl Into<Expr>,
    ) -> Result<Self, ConstructionError> {
        Ok(Self::new(left, BinaryOp::try_from(op)?, right))
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }

    pub fn operation(&self) -> BinaryOp {
        self.op
    }
}

impl FunctionCall {
    /// Create a call by function name, rejecting anything but `sqrt` and `abs`.
    pub fn new(name: &str, arg: impl Into<Expr>) -> Result<Self, ConstructionError> {
        Ok(Self::with_function(name.parse()?, arg))
    }

    pub fn with_function(function: Function, arg: impl Into<Expr>) -> Self {
        Self {
            function,
            arg: Box::new(arg.into()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.function.as_str()
    }

    pub fn function(&self) -> Function {
        self.function
    }

    pub fn arg(&self) -> &Expr {
        &self.arg
    }
}

// Every node kind offers the same capability set as `Expr` itself; only the
// transformer method it dispatches to differs.
macro_rules! impl_node {
    ($node:ident, $method:ident) => {
        impl $node {
            pub fn evaluate(&self) -> Result<f64, EvalError> {
                self.transform(&mut Evaluator::new())
            }

            pub fn print(&self) -> String {
                self.to_string()
            }

            pub fn transform<T: Transformer + ?Sized>(&self, transformer: &mut T) -> T::Output {
                transformer.$method(self)
            }
        }

        impl From<$node> for Expr {
            fn from(node: $node) -> Self {
                Expr::$node(node)
            }
        }
    };
}

impl_node!(Number, transform_number);
impl_node!(BinaryOperation, transform_binary_operation);
impl_node!(FunctionCall, transform_function_call);
impl_node!(Variable, transform_variable);

impl Expr {
    /// Evaluate the tree bottom-up.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        self.transform(&mut Evaluator::new())
    }

    /// Render the tree as infix text, without parentheses.
    pub fn print(&self) -> String {
        self.to_string()
    }

    /// Dispatch to the `transformer` method matching this node's kind.
    pub fn transform<T: Transformer + ?Sized>(&self, transformer: &mut T) -> T::Output {
        match self {
            Expr::Number(number) => transformer.transform_number(number),
            Expr::BinaryOperation(binop) => transformer.transform_binary_operation(binop),
            Expr::FunctionCall(call) => transformer.transform_function_call(call),
            Expr::Variable(variable) => transformer.transform_variable(variable),
        }
    }

    /// The literal value, if this node is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(number) => Some(number.value()),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Expr::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    /// True when no `Variable` occurs anywhere in the tree.
    pub fn is_constant(&self) -> bool {
        match self {
            Expr::Number(_) => true,
            Expr::Variable(_) => false,
            Expr::BinaryOperation(binop) => binop.left.is_constant() && binop.right.is_constant(),
            Expr::FunctionCall(call) => call.arg.is_constant(),
        }
    }

    /// Number of nodes in the tree, the root included.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Variable(_) => 1,
            Expr::BinaryOperation(binop) => 1 + binop.left.node_count() + binop.right.node_count(),
            Expr::FunctionCall(call) => 1 + call.arg.node_count(),
        }
    }
}

impl fmt::Display for Number {
    /// Fixed notation with six fractional digits, e.g. `32.000000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value;
        if value.is_nan() {
            f.write_str("nan")
        } else if value.is_infinite() {
            f.write_str(if value > 0.0 { "inf" } else { "-inf" })
        } else {
            write!(f, "{:.6}", value)
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.op, self.right)
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.function, self.arg)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(number) => fmt::Display::fmt(number, f),
            Expr::BinaryOperation(binop) => fmt::Display::fmt(binop, f),
            Expr::FunctionCall(call) => fmt::Display::fmt(call, f),
            Expr::Variable(variable) => fmt::Display::fmt(variable, f),
        }
    }
}
