#![allow(dead_code)]

use exprtree::{
    BinaryOp, BinaryOperation, CopyTree, EvalError, Expr, FoldConstants, Function, FunctionCall,
    Number, Variable,
};
use pretty_assertions::assert_eq;

pub fn num(value: f64) -> Expr {
    Number::new(value).into()
}

pub fn var(name: &str) -> Expr {
    Variable::new(name).expect("valid variable name").into()
}

pub fn bin(left: Expr, op: char, right: Expr) -> Expr {
    BinaryOperation::from_char(left, op, right)
        .expect("valid operator")
        .into()
}

pub fn call(name: &str, arg: Expr) -> Expr {
    FunctionCall::new(name, arg).expect("valid function name").into()
}

pub fn sqrt(arg: Expr) -> Expr {
    FunctionCall::with_function(Function::Sqrt, arg).into()
}

pub fn abs(arg: Expr) -> Expr {
    FunctionCall::with_function(Function::Abs, arg).into()
}

pub fn op(c: char) -> BinaryOp {
    BinaryOp::try_from(c).expect("valid operator")
}

/// Check every public operation on `tree` at once.
///
/// - `printed`: rendering of the tree itself
/// - `evaluated`: result of `evaluate`
/// - `folded`: rendering of the constant-folded tree, or the fold error
pub fn check(
    tree: &Expr,
    printed: &str,
    evaluated: Result<f64, EvalError>,
    folded: Result<&str, EvalError>,
) {
    assert_eq!(tree.print(), printed, "print");

    match (tree.evaluate(), evaluated) {
        (Ok(got), Ok(want)) if got.is_nan() && want.is_nan() => {}
        (got, want) => assert_eq!(got, want, "evaluate"),
    }

    let copy = tree.transform(&mut CopyTree);
    assert_eq!(&copy, tree, "copy");
    assert_eq!(copy.print(), printed, "copy print");

    let got_folded = tree.transform(&mut FoldConstants);
    assert_eq!(
        got_folded.as_ref().map(Expr::print).map_err(|e| *e),
        folded.map(str::to_string),
        "fold"
    );
    if let Ok(folded) = &got_folded {
        assert!(folded.node_count() <= tree.node_count(), "fold grew the tree");
    }
}

#[macro_export]
macro_rules! test_case {
    (
        $name:ident,
        tree: $tree:expr,
        printed: $printed:expr,
        evaluated: $evaluated:expr,
        folded: $folded:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let tree: exprtree::Expr = $tree;
            cases::check(&tree, $printed, $evaluated, $folded);
        }
    };
}
