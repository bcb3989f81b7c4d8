//! Test modules for the evaluation core.
//!
//! Engine-level tests (fold, chain) exercise the engines directly on
//! materialized values; term and step tests drive the async boundary with
//! effect-recording terms from `support`.

mod fold_tests;
mod support;
