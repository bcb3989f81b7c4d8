//! Fold engine tests: operator semantics over materialized operand
//! sequences, including the identity-seed and left-seed contracts.

use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use pretty_assertions::assert_eq;
use rill_ir::FoldOp;

use crate::errors::EvalErrorKind;
use crate::fold::{evaluate_fold, fold_seeded};
use crate::value::Value;

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::int).collect()
}

fn bools(values: &[bool]) -> Vec<Value> {
    values.iter().copied().map(Value::Bool).collect()
}

#[test]
fn sum_folds_left_to_right() {
    assert_eq!(
        evaluate_fold(FoldOp::Sum, ints(&[1, 2, 3, 4])),
        Ok(Value::Int(10))
    );
}

#[test]
fn identity_seeded_operators_are_total_on_empty_sequences() {
    assert_eq!(evaluate_fold(FoldOp::Sum, vec![]), Ok(Value::Int(0)));
    assert_eq!(evaluate_fold(FoldOp::Product, vec![]), Ok(Value::Int(1)));
    assert_eq!(evaluate_fold(FoldOp::All, vec![]), Ok(Value::Bool(true)));
    assert_eq!(evaluate_fold(FoldOp::Any, vec![]), Ok(Value::Bool(false)));
}

#[test]
fn difference_is_left_associative() {
    // (10 - 3) - 2, never 10 - (3 - 2).
    assert_eq!(
        evaluate_fold(FoldOp::Difference, ints(&[10, 3, 2])),
        Ok(Value::Int(5))
    );
}

#[test]
fn quotient_is_left_associative() {
    assert_eq!(
        evaluate_fold(FoldOp::Quotient, ints(&[100, 5, 2])),
        Ok(Value::Int(10))
    );
}

#[test]
fn modulo_is_left_associative() {
    // (100 % 7) % 4 = 2, not 100 % (7 % 4).
    assert_eq!(
        evaluate_fold(FoldOp::Modulo, ints(&[100, 7, 4])),
        Ok(Value::Int(2))
    );
}

#[test]
fn power_is_left_associative() {
    // (2 ^ 3) ^ 2 = 64, not 2 ^ (3 ^ 2) = 512.
    assert_eq!(
        evaluate_fold(FoldOp::Power, ints(&[2, 3, 2])),
        Ok(Value::Int(64))
    );
}

#[test]
fn single_operand_left_seeded_fold_is_the_operand() {
    assert_eq!(
        evaluate_fold(FoldOp::Difference, ints(&[7])),
        Ok(Value::Int(7))
    );
}

#[test]
fn quotient_by_zero_is_a_domain_error() {
    let err = evaluate_fold(FoldOp::Quotient, ints(&[100, 0, 2])).unwrap_err();
    assert_eq!(err.kind(), &EvalErrorKind::DivisionByZero);
}

#[test]
fn float_quotient_by_zero_is_a_domain_error() {
    let err = evaluate_fold(
        FoldOp::Quotient,
        vec![Value::float(1.0), Value::float(0.0)],
    )
    .unwrap_err();
    assert_eq!(err.kind(), &EvalErrorKind::DivisionByZero);
}

#[test]
fn fold_aborts_at_the_failing_operand() {
    // The combinator runs once for (100, 0), fails, and is never invoked
    // for the trailing operand.
    let calls = AtomicUsize::new(0);
    let result = fold_seeded(ints(&[100, 0, 2]), |_, b| {
        calls.fetch_add(1, AtomicOrdering::SeqCst);
        if b == Value::Int(0) {
            Err(crate::errors::division_by_zero())
        } else {
            Ok(b)
        }
    });
    assert!(result.is_err());
    assert_eq!(calls.load(AtomicOrdering::SeqCst), 1);
}

#[test]
fn modulo_by_zero_is_a_distinct_domain_error() {
    let err = evaluate_fold(FoldOp::Modulo, ints(&[10, 0])).unwrap_err();
    assert_eq!(err.kind(), &EvalErrorKind::ModuloByZero);

    let err = evaluate_fold(
        FoldOp::Modulo,
        vec![Value::float(10.0), Value::float(0.0)],
    )
    .unwrap_err();
    assert_eq!(err.kind(), &EvalErrorKind::ModuloByZero);
}

#[test]
fn modulo_sign_follows_the_dividend() {
    assert_eq!(
        evaluate_fold(FoldOp::Modulo, ints(&[-7, 3])),
        Ok(Value::Int(-1))
    );
    assert_eq!(
        evaluate_fold(FoldOp::Modulo, ints(&[7, -3])),
        Ok(Value::Int(1))
    );
}

#[test]
fn mixed_sequence_promotes_to_float() {
    assert_eq!(
        evaluate_fold(FoldOp::Sum, vec![Value::int(1), Value::float(2.5)]),
        Ok(Value::Float(3.5))
    );
    assert_eq!(
        evaluate_fold(
            FoldOp::Product,
            vec![Value::float(2.0), Value::int(3), Value::int(4)]
        ),
        Ok(Value::Float(24.0))
    );
}

#[test]
fn all_int_sequence_stays_integer() {
    assert_eq!(
        evaluate_fold(FoldOp::Quotient, ints(&[7, 2])),
        Ok(Value::Int(3))
    );
}

#[test]
fn float_quotient_does_not_truncate() {
    assert_eq!(
        evaluate_fold(FoldOp::Quotient, vec![Value::float(7.0), Value::int(2)]),
        Ok(Value::Float(3.5))
    );
}

#[test]
fn integer_overflow_is_a_domain_error() {
    let err = evaluate_fold(FoldOp::Sum, ints(&[i64::MAX, 1])).unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::IntegerOverflow {
            operation: "addition".to_string()
        }
    );

    let err = evaluate_fold(FoldOp::Quotient, ints(&[i64::MIN, -1])).unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::IntegerOverflow {
            operation: "division".to_string()
        }
    );
}

#[test]
fn integer_power_overflow_is_a_domain_error() {
    let err = evaluate_fold(FoldOp::Power, ints(&[10, 50])).unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::IntegerOverflow {
            operation: "exponentiation".to_string()
        }
    );
}

#[test]
fn integer_power_with_negative_exponent_rounds() {
    // 2 ^ -1 = 0.5, rounded to the nearest integer.
    assert_eq!(
        evaluate_fold(FoldOp::Power, ints(&[2, -1])),
        Ok(Value::Int(1))
    );
}

#[test]
fn float_power_uses_powf() {
    assert_eq!(
        evaluate_fold(FoldOp::Power, vec![Value::float(2.0), Value::int(10)]),
        Ok(Value::Float(1024.0))
    );
}

#[test]
fn conjunction_and_disjunction_fold_all_operands() {
    assert_eq!(
        evaluate_fold(FoldOp::All, bools(&[true, true, false])),
        Ok(Value::Bool(false))
    );
    assert_eq!(
        evaluate_fold(FoldOp::Any, bools(&[false, false, true])),
        Ok(Value::Bool(true))
    );
}

#[test]
fn logical_operators_type_check_every_operand() {
    // `false` decides the conjunction, yet the trailing int still fails:
    // operands are fully materialized, so no type error is masked.
    let err = evaluate_fold(
        FoldOp::All,
        vec![Value::Bool(false), Value::int(1)],
    )
    .unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::TypeMismatch {
            op_symbol: "&&",
            left: "bool",
            right: "int"
        }
    );
}

#[test]
fn arithmetic_on_non_numeric_operands_is_a_type_error() {
    let err = evaluate_fold(
        FoldOp::Sum,
        vec![Value::int(1), Value::string("two")],
    )
    .unwrap_err();
    assert_eq!(
        err.kind(),
        &EvalErrorKind::TypeMismatch {
            op_symbol: "+",
            left: "int",
            right: "str"
        }
    );
}
