//! Terms and the term evaluator.
//!
//! A term is an opaque async sub-computation owned by the surrounding graph:
//! driven with the ambient [`StepContext`], it yields one [`Value`] or an
//! error. Operator steps never own their terms' semantics - they only
//! control the order in which terms are driven.
//!
//! Evaluation is strictly sequential. Each term is driven to completion,
//! failure, or cancellation before the next begins; that ordering is what
//! makes left-seeded, non-associative operators deterministic, so it is a
//! contract rather than an implementation detail.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::errors::{cancelled, EvalError, EvalResult};
use crate::value::Value;

/// Boxed future returned by [`Term::resolve`].
pub type TermFuture<'a> = BoxFuture<'a, EvalResult>;

/// Ambient execution context threaded through one step invocation.
///
/// Carries the cooperative-abort signal. The wider runtime context
/// (configuration, external resource handles) lives behind the terms
/// themselves and is opaque to the evaluation core.
#[derive(Clone, Debug, Default)]
pub struct StepContext {
    cancel: CancellationToken,
}

impl StepContext {
    /// Context that is never cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context observing an externally owned cancellation token.
    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Whether the cooperative-abort signal has fired.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// An opaque sub-computation supplying one operand to an operator step.
///
/// Terms may suspend (e.g. pending I/O); the evaluator awaits them without
/// blocking unrelated work elsewhere in the graph. Steps themselves
/// implement `Term`, which is how operator steps nest inside one another.
pub trait Term: Send + Sync {
    /// Drive this term to a single value or an error.
    fn resolve<'a>(&'a self, ctx: &'a StepContext) -> TermFuture<'a>;
}

/// A term that resolves immediately to a fixed value.
pub struct Const(Value);

impl Const {
    pub fn new(value: Value) -> Self {
        Self(value)
    }
}

impl Term for Const {
    fn resolve<'a>(&'a self, _ctx: &'a StepContext) -> TermFuture<'a> {
        Box::pin(async move { Ok(self.0.clone()) })
    }
}

/// Resolve an ordered list of terms into an ordered list of values.
///
/// Fail-fast: the first term error is returned unchanged and no further
/// term is started. The cancellation signal is observed between terms; once
/// set, a [`cancelled`] error is returned without starting the next term,
/// and no partial operand list escapes to the fold or comparison stage.
pub async fn resolve_terms(
    terms: &[Arc<dyn Term>],
    ctx: &StepContext,
) -> Result<Vec<Value>, EvalError> {
    let mut operands = Vec::with_capacity(terms.len());
    for (index, term) in terms.iter().enumerate() {
        if ctx.is_cancelled() {
            trace!(index, "term evaluation cancelled");
            return Err(cancelled());
        }
        operands.push(term.resolve(ctx).await?);
    }
    Ok(operands)
}
