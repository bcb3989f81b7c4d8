#![deny(clippy::arithmetic_side_effects)]
//! Rill Eval - operator-step evaluation core for the Rill runtime.
//!
//! A Rill program is a graph of steps. Operator steps own an ordered list of
//! terms (opaque async sub-computations supplied by the surrounding graph),
//! resolve them strictly in order, and combine the materialized operands.
//!
//! # Architecture
//!
//! - `resolve_terms`: the term evaluator - sequential, fail-fast, observes
//!   the cooperative cancellation token between terms
//! - `evaluate_fold`: direct enum-based dispatch of n-ary fold operators
//!   onto the two fold engines (identity-seeded and left-seeded)
//! - `evaluate_chain`: pairwise chained comparison with short-circuit
//! - `Value` / `EvalError`: the value and error vocabulary shared with the
//!   surrounding runtime
//!
//! Everything is created per step invocation and dropped at its end; there
//! is no shared mutable state between sibling or repeated invocations.

pub mod chain;
pub mod errors;
pub mod fold;
mod step;
mod term;
mod value;

// Re-export the operator identities so evaluator callers need one import.
pub use rill_ir::{ChainOp, FoldOp};

pub use chain::{chain_with, evaluate_chain};
pub use errors::{
    cancelled, division_by_zero, integer_overflow, modulo_by_zero, not_comparable, type_mismatch,
    EvalError, EvalErrorKind, EvalResult,
};
pub use fold::{evaluate_fold, fold_identity, fold_seeded};
pub use step::{ComparisonStep, OperatorStep};
pub use term::{resolve_terms, Const, StepContext, Term, TermFuture};
pub use value::Value;

#[cfg(test)]
mod tests;
