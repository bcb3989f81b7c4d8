//! Runtime values flowing between steps.
//!
//! Operand sequences are materialized as `Value`s by the term evaluator
//! before any operator logic runs. The set is fixed (not user-extensible),
//! so enum dispatch is preferred over trait objects throughout the
//! evaluator.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::errors::{not_comparable, EvalError};

/// Runtime value in the Rill evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// String value (shared, immutable).
    Str(Arc<str>),
}

impl Value {
    /// Create an integer value.
    pub fn int(n: i64) -> Self {
        Self::Int(n)
    }

    /// Create a float value.
    pub fn float(n: f64) -> Self {
        Self::Float(n)
    }

    /// Create a string value.
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::Str(Arc::from(s.as_ref()))
    }

    /// The surface-level name of this value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "str",
        }
    }

    /// Three-way comparison between two values.
    ///
    /// Ints and floats compare numerically (ints promote to f64 when mixed).
    /// Strings compare lexicographically, booleans with `false < true`.
    /// Cross-category pairs and NaN on either side are not comparable: the
    /// chain comparator must surface an error rather than silently order
    /// them.
    pub fn compare(&self, other: &Self) -> Result<Ordering, EvalError> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Ok(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => float_cmp(*a, *b),
            #[expect(clippy::cast_precision_loss, reason = "numeric promotion is lossy by the language's comparison rules")]
            (Self::Int(a), Self::Float(b)) => float_cmp(*a as f64, *b),
            #[expect(clippy::cast_precision_loss, reason = "numeric promotion is lossy by the language's comparison rules")]
            (Self::Float(a), Self::Int(b)) => float_cmp(*a, *b as f64),
            (Self::Str(a), Self::Str(b)) => Ok(a.cmp(b)),
            (Self::Bool(a), Self::Bool(b)) => Ok(a.cmp(b)),
            _ => Err(not_comparable(self.type_name(), other.type_name())),
        }
    }
}

/// IEEE 754 compliant comparison; NaN is never ordered.
fn float_cmp(a: f64, b: f64) -> Result<Ordering, EvalError> {
    a.partial_cmp(&b)
        .ok_or_else(|| not_comparable("float (NaN)", "float"))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            // Debug formatting keeps the decimal point on whole floats
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
