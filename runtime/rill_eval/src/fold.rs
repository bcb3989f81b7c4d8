//! The n-ary operator fold engine.
//!
//! Provides the two fold shapes and direct enum-based dispatch from
//! [`FoldOp`] to a per-operator binary combinator. The operator set is fixed
//! (not user-extensible), so pattern matching is preferred over trait
//! objects for exhaustiveness checking.
//!
//! Both shapes consume operands already materialized by the term evaluator,
//! so nothing here can skip or reorder an operand's side effects: a
//! combinator error merely discards the remaining (already evaluated)
//! operands.
//!
//! Mixed int/float operand sequences are combined in `f64`; an all-int
//! sequence stays in checked `i64` arithmetic.

use rill_ir::FoldOp;

use crate::errors::{
    division_by_zero, integer_overflow, modulo_by_zero, type_mismatch, EvalResult,
};
use crate::value::Value;

/// Left-seeded fold: accumulator starts from the first operand.
///
/// Used by the non-associative operators (`-`, `/`, `%`, `^`), for which
/// left-to-right order is an observable contract: `[a, b, c]` evaluates as
/// `(a ∘ b) ∘ c`, never `a ∘ (b ∘ c)`. A combinator error aborts the fold
/// at that operand.
///
/// An empty operand sequence is a caller contract violation, not a runtime
/// error: the grammar guarantees at least one operand reaches this layer.
pub fn fold_seeded<F>(operands: Vec<Value>, combine: F) -> EvalResult
where
    F: Fn(Value, Value) -> EvalResult,
{
    let mut iter = operands.into_iter();
    let Some(mut accumulator) = iter.next() else {
        unreachable!("the grammar guarantees left-seeded operators at least one operand")
    };
    for operand in iter {
        accumulator = combine(accumulator, operand)?;
    }
    Ok(accumulator)
}

/// Identity-seeded fold: accumulator starts from the operator's algebraic
/// identity element, so the fold is total even over zero operands.
///
/// Every operand is combined in order - there is no fold-stage
/// short-circuit, keeping operand side-effect ordering identical across all
/// operators.
pub fn fold_identity<F>(
    identity: Value,
    operands: impl IntoIterator<Item = Value>,
    combine: F,
) -> EvalResult
where
    F: Fn(Value, Value) -> EvalResult,
{
    let mut accumulator = identity;
    for operand in operands {
        accumulator = combine(accumulator, operand)?;
    }
    Ok(accumulator)
}

/// Evaluate an n-ary fold operator over a materialized operand sequence.
///
/// Identity-seeded operators are defined on an empty sequence:
/// `sum([]) = 0`, `product([]) = 1`, `all([]) = true`, `any([]) = false`.
/// Left-seeded operators require a non-empty sequence (grammar-guaranteed).
pub fn evaluate_fold(op: FoldOp, operands: Vec<Value>) -> EvalResult {
    match op {
        FoldOp::Sum => fold_identity(Value::Int(0), operands, add),
        FoldOp::Product => fold_identity(Value::Int(1), operands, mul),
        FoldOp::All => fold_identity(Value::Bool(true), operands, and),
        FoldOp::Any => fold_identity(Value::Bool(false), operands, or),
        FoldOp::Difference => fold_seeded(operands, sub),
        FoldOp::Quotient => fold_seeded(operands, div),
        FoldOp::Modulo => fold_seeded(operands, rem),
        FoldOp::Power => fold_seeded(operands, pow),
    }
}

// Combinators
//
// Each combinator owns its operator symbol for diagnostics and its domain
// checks; the fold engines stay generic.

/// Checked integer arithmetic with overflow reported as a domain error.
fn checked_int(result: Option<i64>, operation: &'static str) -> EvalResult {
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(operation))
}

/// Numeric view of a value for float-mode combination.
#[expect(
    clippy::cast_precision_loss,
    reason = "int operands promote to f64 when a float appears in the sequence"
)]
fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(n) => Some(*n),
        Value::Bool(_) | Value::Str(_) => None,
    }
}

/// Combine two operands in f64, promoting ints; errors on non-numeric types.
fn float_combine(
    op_symbol: &'static str,
    a: Value,
    b: Value,
    op: impl FnOnce(f64, f64) -> f64,
) -> EvalResult {
    match (as_float(&a), as_float(&b)) {
        (Some(x), Some(y)) => Ok(Value::Float(op(x, y))),
        _ => Err(type_mismatch(op_symbol, a.type_name(), b.type_name())),
    }
}

fn add(a: Value, b: Value) -> EvalResult {
    match (&a, &b) {
        (Value::Int(x), Value::Int(y)) => checked_int(x.checked_add(*y), "addition"),
        _ => float_combine("+", a, b, |x, y| x + y),
    }
}

fn sub(a: Value, b: Value) -> EvalResult {
    match (&a, &b) {
        (Value::Int(x), Value::Int(y)) => checked_int(x.checked_sub(*y), "subtraction"),
        _ => float_combine("-", a, b, |x, y| x - y),
    }
}

fn mul(a: Value, b: Value) -> EvalResult {
    match (&a, &b) {
        (Value::Int(x), Value::Int(y)) => checked_int(x.checked_mul(*y), "multiplication"),
        _ => float_combine("*", a, b, |x, y| x * y),
    }
}

/// Quotient: truncating division on ints, `/` on floats. A divisor that is
/// literally zero is a `DivisionByZero` domain error in both modes.
fn div(a: Value, b: Value) -> EvalResult {
    match (&a, &b) {
        (Value::Int(x), Value::Int(y)) => {
            if *y == 0 {
                Err(division_by_zero())
            } else {
                checked_int(x.checked_div(*y), "division")
            }
        }
        _ => match (as_float(&a), as_float(&b)) {
            (Some(x), Some(y)) => {
                if y == 0.0 {
                    Err(division_by_zero())
                } else {
                    Ok(Value::Float(x / y))
                }
            }
            _ => Err(type_mismatch("/", a.type_name(), b.type_name())),
        },
    }
}

/// Truncating remainder; the sign follows the dividend. A zero divisor is a
/// `ModuloByZero` domain error in both modes.
fn rem(a: Value, b: Value) -> EvalResult {
    match (&a, &b) {
        (Value::Int(x), Value::Int(y)) => {
            if *y == 0 {
                Err(modulo_by_zero())
            } else {
                checked_int(x.checked_rem(*y), "remainder")
            }
        }
        _ => match (as_float(&a), as_float(&b)) {
            (Some(x), Some(y)) => {
                if y == 0.0 {
                    Err(modulo_by_zero())
                } else {
                    Ok(Value::Float(x % y))
                }
            }
            _ => Err(type_mismatch("%", a.type_name(), b.type_name())),
        },
    }
}

fn pow(a: Value, b: Value) -> EvalResult {
    match (&a, &b) {
        (Value::Int(x), Value::Int(y)) => int_pow(*x, *y),
        _ => float_combine("^", a, b, f64::powf),
    }
}

/// 2^63 as f64: the smallest magnitude that no longer fits in i64.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Integer exponentiation: computed in floating point and rounded to the
/// nearest integer; a rounded result outside the i64 range is an overflow
/// domain error rather than a wrap or saturation.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "integer power is defined as the rounded floating result"
)]
fn int_pow(base: i64, exponent: i64) -> EvalResult {
    let rounded = (base as f64).powf(exponent as f64).round();
    if rounded.is_finite() && rounded >= -I64_LIMIT && rounded < I64_LIMIT {
        Ok(Value::Int(rounded as i64))
    } else {
        Err(integer_overflow("exponentiation"))
    }
}

fn and(a: Value, b: Value) -> EvalResult {
    logical("&&", a, b, |x, y| x && y)
}

fn or(a: Value, b: Value) -> EvalResult {
    logical("||", a, b, |x, y| x || y)
}

/// Conjunction/disjunction combine fully materialized booleans, so every
/// operand is type-checked and folded even once the outcome is decided.
fn logical(
    op_symbol: &'static str,
    a: Value,
    b: Value,
    op: impl FnOnce(bool, bool) -> bool,
) -> EvalResult {
    match (&a, &b) {
        (Value::Bool(x), Value::Bool(y)) => Ok(Value::Bool(op(*x, *y))),
        _ => Err(type_mismatch(op_symbol, a.type_name(), b.type_name())),
    }
}
