//! The chained-comparison engine.
//!
//! One generic routine evaluates every [`ChainOp`]: compute the three-way
//! ordering of each consecutive operand pair and apply the operator's
//! predicate to the outcome. The chain is the logical AND of all pairwise
//! results.

use std::cmp::Ordering;

use rill_ir::ChainOp;

use crate::errors::EvalError;
use crate::value::Value;

/// Evaluate a chain with an explicit predicate over the three-way outcome.
///
/// Short-circuits to `false` at the first failing pair; later pairs are
/// never compared. This is safe because operand values are fully
/// materialized before comparison begins, so no side effect is skipped.
/// A sequence of fewer than two operands is vacuously true.
pub fn chain_with<P>(operands: &[Value], predicate: P) -> Result<bool, EvalError>
where
    P: Fn(Ordering) -> bool,
{
    for (left, right) in operands.iter().zip(operands.iter().skip(1)) {
        let outcome = left.compare(right)?;
        if !predicate(outcome) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Evaluate a chained comparison operator over a materialized operand
/// sequence.
pub fn evaluate_chain(op: ChainOp, operands: &[Value]) -> Result<bool, EvalError> {
    chain_with(operands, |outcome| match op {
        ChainOp::Eq => outcome == Ordering::Equal,
        ChainOp::NotEq => outcome != Ordering::Equal,
        ChainOp::Lt => outcome == Ordering::Less,
        ChainOp::LtEq => outcome != Ordering::Greater,
        ChainOp::Gt => outcome == Ordering::Greater,
        ChainOp::GtEq => outcome != Ordering::Less,
    })
}
