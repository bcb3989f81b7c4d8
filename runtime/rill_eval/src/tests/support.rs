//! Shared test terms for observing evaluation order and effects.

use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;

use crate::errors::{EvalError, EvalResult};
use crate::term::{StepContext, Term, TermFuture};
use crate::value::Value;

/// Log of term labels in the order their effects ran.
pub type EffectLog = Arc<Mutex<Vec<&'static str>>>;

pub fn effect_log() -> EffectLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn effects(log: &EffectLog) -> Vec<&'static str> {
    log.lock().unwrap().clone()
}

/// Term that records its effect in the log, then yields a fixed outcome.
pub struct Recorded {
    label: &'static str,
    outcome: EvalResult,
    log: EffectLog,
}

impl Recorded {
    pub fn ok(label: &'static str, value: Value, log: &EffectLog) -> Arc<dyn Term> {
        Arc::new(Self {
            label,
            outcome: Ok(value),
            log: Arc::clone(log),
        })
    }

    pub fn err(label: &'static str, error: EvalError, log: &EffectLog) -> Arc<dyn Term> {
        Arc::new(Self {
            label,
            outcome: Err(error),
            log: Arc::clone(log),
        })
    }
}

impl Term for Recorded {
    fn resolve<'a>(&'a self, _ctx: &'a StepContext) -> TermFuture<'a> {
        Box::pin(async move {
            self.log.lock().unwrap().push(self.label);
            self.outcome.clone()
        })
    }
}

/// Term that records its effect, then fires the cancellation token.
pub struct CancelOnResolve {
    label: &'static str,
    token: CancellationToken,
    log: EffectLog,
}

impl CancelOnResolve {
    pub fn arc(
        label: &'static str,
        token: CancellationToken,
        log: &EffectLog,
    ) -> Arc<dyn Term> {
        Arc::new(Self {
            label,
            token,
            log: Arc::clone(log),
        })
    }
}

impl Term for CancelOnResolve {
    fn resolve<'a>(&'a self, _ctx: &'a StepContext) -> TermFuture<'a> {
        Box::pin(async move {
            self.log.lock().unwrap().push(self.label);
            self.token.cancel();
            Ok(Value::int(0))
        })
    }
}

/// Term that suspends once before yielding, proving the evaluator awaits
/// suspension rather than requiring immediate readiness.
pub struct Suspending(pub Value);

impl Term for Suspending {
    fn resolve<'a>(&'a self, _ctx: &'a StepContext) -> TermFuture<'a> {
        Box::pin(async move {
            tokio::task::yield_now().await;
            Ok(self.0.clone())
        })
    }
}
