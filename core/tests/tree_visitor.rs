//! End-to-end scenarios over the public API: build a tree bottom-up, then
//! evaluate, print and transform it.

use exprtree_core::{
    BinaryOp, BinaryOperation, ConstructionError, CopyTree, EvalError, Expr, FoldConstants,
    FunctionCall, Number, Transformer, Variable,
};
use pretty_assertions::assert_eq;

/// `abs(var*sqrt(32-16))`, the tree the demo driver prints.
fn sample_tree() -> Result<Expr, ConstructionError> {
    let minus = BinaryOperation::new(Number::new(32.0), BinaryOp::Sub, Number::new(16.0));
    let call_sqrt = FunctionCall::new("sqrt", minus)?;
    let var = Variable::new("var")?;
    let mult = BinaryOperation::new(var, BinaryOp::Mul, call_sqrt);
    Ok(FunctionCall::new("abs", mult)?.into())
}

#[test]
fn number_evaluates_and_prints() {
    let n = Number::new(32.0);
    assert_eq!(n.value(), 32.0);
    assert_eq!(n.evaluate().unwrap(), 32.0);
    assert_eq!(n.print(), "32.000000");
}

#[test]
fn subtraction() {
    let minus = BinaryOperation::new(Number::new(32.0), BinaryOp::Sub, Number::new(16.0));
    assert_eq!(minus.evaluate().unwrap(), 16.0);
}

#[test]
fn division_and_division_by_zero() {
    let div = BinaryOperation::new(Number::new(32.0), BinaryOp::Div, Number::new(16.0));
    assert_eq!(div.evaluate().unwrap(), 2.0);

    let by_zero = BinaryOperation::new(Number::new(32.0), BinaryOp::Div, Number::new(0.0));
    assert_eq!(
        by_zero.evaluate().unwrap_err(),
        EvalError::DivisionByZero { dividend: 32.0 }
    );
}

#[test]
fn multiplication() {
    let mul = BinaryOperation::new(Number::new(32.0), BinaryOp::Mul, Number::new(16.0));
    assert_eq!(mul.evaluate().unwrap(), 512.0);
}

#[test]
fn sqrt_and_abs() {
    let sqrt = FunctionCall::new("sqrt", Number::new(16.0)).unwrap();
    assert_eq!(sqrt.evaluate().unwrap(), 4.0);

    let abs = FunctionCall::new("abs", Number::new(-32.0)).unwrap();
    assert_eq!(abs.evaluate().unwrap(), 32.0);
}

#[test]
fn sqrt_of_negative_is_domain_error() {
    let sqrt = FunctionCall::new("sqrt", Number::new(-16.0)).unwrap();
    assert!(matches!(sqrt.evaluate(), Err(EvalError::Domain { .. })));
}

#[test]
fn copy_tree_round_trips_through_print() {
    let tree = sample_tree().unwrap();
    let copy = tree.transform(&mut CopyTree);
    assert_eq!(copy.print(), tree.print());
    assert_eq!(copy.print(), "abs(var*sqrt(32.000000-16.000000))");

    // Independent lifetimes: the copy outlives its source.
    drop(tree);
    assert_eq!(copy.evaluate().unwrap(), 0.0);
}

#[test]
fn fold_constants_stops_at_variables() {
    let tree = sample_tree().unwrap();
    let folded = tree.transform(&mut FoldConstants).unwrap();

    let Expr::FunctionCall(abs) = &folded else {
        panic!("expected abs(...) at the root, got {folded}");
    };
    assert_eq!(abs.name(), "abs");

    let Expr::BinaryOperation(mult) = abs.arg() else {
        panic!("expected var*... under abs, got {}", abs.arg());
    };
    assert_eq!(mult.operation(), BinaryOp::Mul);
    assert_eq!(mult.left().as_variable().map(Variable::name), Some("var"));
    assert_eq!(mult.right().as_number(), Some(4.0));

    assert_eq!(folded.print(), "abs(var*4.000000)");
}

#[test]
fn fold_constants_of_constant_tree_is_a_number() {
    let tree: Expr = FunctionCall::new(
        "sqrt",
        BinaryOperation::new(Number::new(32.0), BinaryOp::Sub, Number::new(16.0)),
    )
    .unwrap()
    .into();
    let folded = tree.transform(&mut FoldConstants).unwrap();
    assert_eq!(folded, Expr::Number(Number::new(4.0)));
    assert_eq!(folded.evaluate().unwrap(), tree.evaluate().unwrap());
}

#[test]
fn construction_rejects_invalid_nodes() {
    assert_eq!(
        FunctionCall::new("exp", Number::new(1.0)).unwrap_err(),
        ConstructionError::UnknownFunction("exp".to_string())
    );
    assert_eq!(
        Variable::new("").unwrap_err(),
        ConstructionError::EmptyVariableName
    );
}

#[test]
fn transformer_methods_can_be_called_directly() {
    let mut fold = FoldConstants::new();
    let binop = BinaryOperation::new(Number::new(32.0), BinaryOp::Div, Number::new(16.0));
    assert_eq!(
        fold.transform_binary_operation(&binop).unwrap().as_number(),
        Some(2.0)
    );
}
