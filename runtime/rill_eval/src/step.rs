//! Operator steps - the graph-node boundary of the evaluation core.
//!
//! A step owns references to its child terms, resolves them through the
//! term evaluator, and hands the materialized operand sequence to the fold
//! or chain engine. Steps implement [`Term`] themselves, so operator steps
//! nest as operands of other steps.
//!
//! Steps hold no evaluation state: the operand sequence and accumulator
//! live only for the duration of one `evaluate` call, so concurrent sibling
//! invocations (parallel branches of the surrounding graph) are fully
//! independent.

use std::fmt;
use std::sync::Arc;

use rill_ir::{ChainOp, FoldOp};
use tracing::trace;

use crate::chain::evaluate_chain;
use crate::errors::EvalResult;
use crate::fold::evaluate_fold;
use crate::term::{resolve_terms, StepContext, Term, TermFuture};
use crate::value::Value;

/// An n-ary fold operator step.
pub struct OperatorStep {
    op: FoldOp,
    terms: Vec<Arc<dyn Term>>,
}

impl OperatorStep {
    /// Create a fold step over the given terms.
    ///
    /// Left-seeded operators require at least one term; the grammar
    /// guarantees this for parsed programs.
    pub fn new(op: FoldOp, terms: Vec<Arc<dyn Term>>) -> Self {
        debug_assert!(
            op.is_identity_seeded() || !terms.is_empty(),
            "left-seeded operator `{}` requires at least one term",
            op.as_symbol()
        );
        Self { op, terms }
    }

    /// The operator this step folds with.
    pub fn op(&self) -> FoldOp {
        self.op
    }

    /// The operator's source-level symbol, for diagnostics.
    pub fn symbol(&self) -> &'static str {
        self.op.as_symbol()
    }

    /// Resolve all terms in order, then fold the operands.
    pub async fn evaluate(&self, ctx: &StepContext) -> EvalResult {
        trace!(
            symbol = self.symbol(),
            terms = self.terms.len(),
            "evaluating fold step"
        );
        let operands = resolve_terms(&self.terms, ctx).await?;
        evaluate_fold(self.op, operands)
    }
}

impl Term for OperatorStep {
    fn resolve<'a>(&'a self, ctx: &'a StepContext) -> TermFuture<'a> {
        Box::pin(self.evaluate(ctx))
    }
}

impl fmt::Display for OperatorStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} step ({} terms)", self.symbol(), self.terms.len())
    }
}

/// A chained-comparison operator step.
pub struct ComparisonStep {
    op: ChainOp,
    terms: Vec<Arc<dyn Term>>,
}

impl ComparisonStep {
    /// Create a comparison step over the given terms.
    pub fn new(op: ChainOp, terms: Vec<Arc<dyn Term>>) -> Self {
        Self { op, terms }
    }

    /// The comparison operator of this chain.
    pub fn op(&self) -> ChainOp {
        self.op
    }

    /// The operator's source-level symbol, for diagnostics.
    pub fn symbol(&self) -> &'static str {
        self.op.as_symbol()
    }

    /// Resolve all terms in order, then compare consecutive pairs.
    pub async fn evaluate(&self, ctx: &StepContext) -> EvalResult {
        trace!(
            symbol = self.symbol(),
            terms = self.terms.len(),
            "evaluating comparison step"
        );
        let operands = resolve_terms(&self.terms, ctx).await?;
        Ok(Value::Bool(evaluate_chain(self.op, &operands)?))
    }
}

impl Term for ComparisonStep {
    fn resolve<'a>(&'a self, ctx: &'a StepContext) -> TermFuture<'a> {
        Box::pin(self.evaluate(ctx))
    }
}

impl fmt::Display for ComparisonStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} step ({} terms)", self.symbol(), self.terms.len())
    }
}
