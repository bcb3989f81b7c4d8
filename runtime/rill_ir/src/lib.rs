//! Rill IR - operator identities for the Rill step-graph runtime.
//!
//! This crate defines the operator vocabulary shared by the parser, the
//! formatter, and the evaluator: which n-ary and chained-comparison operator
//! steps exist, and the source-level symbol each one renders as. It carries
//! no evaluation logic; semantics live in `rill_eval`.

mod operators;

pub use operators::{ChainOp, FoldOp};
