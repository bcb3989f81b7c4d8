//! Error types for operator-step evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed categories for the three terminal failure
//! classes of a step invocation: domain errors raised by a combinator
//! (`DivisionByZero`, `ModuloByZero`, `IntegerOverflow`, ...), cancellation,
//! and uncategorized term failures. Factory functions (e.g.
//! `division_by_zero()`) are the public construction API - they keep call
//! sites terse and the message catalog in one place.
//!
//! All of these are terminal for the current invocation: nothing here is
//! retried or recovered internally. Errors bubble unchanged to the invoking
//! graph node, which owns presentation and any higher-level retry policy.

use std::fmt;

use crate::value::Value;

/// Result of evaluating a step or term.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category for structured diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Domain errors raised by a combinator
    /// Quotient with a divisor that is literally zero.
    DivisionByZero,
    /// Modulo with a zero divisor.
    ModuloByZero,
    /// Checked integer arithmetic overflowed.
    IntegerOverflow { operation: String },
    /// Operand type invalid for the operator.
    TypeMismatch {
        op_symbol: &'static str,
        left: &'static str,
        right: &'static str,
    },
    /// Chain comparison across values with no defined ordering.
    NotComparable {
        left: &'static str,
        right: &'static str,
    },

    // Invocation-level
    /// The cooperative-abort signal fired before all terms were evaluated.
    Cancelled,

    /// Catch-all for failures not categorized into structured kinds.
    Custom { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::TypeMismatch {
                op_symbol,
                left,
                right,
            } => {
                write!(
                    f,
                    "operator `{op_symbol}` cannot be applied to `{left}` and `{right}`"
                )
            }
            Self::NotComparable { left, right } => {
                write!(f, "cannot compare `{left}` with `{right}`")
            }
            Self::Cancelled => write!(f, "evaluation cancelled"),
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Error produced while evaluating a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    kind: EvalErrorKind,
}

impl EvalError {
    /// Create an uncategorized error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: EvalErrorKind::Custom {
                message: message.into(),
            },
        }
    }

    /// Create an error from a structured kind.
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        Self { kind }
    }

    /// The structured category of this error.
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    /// Whether this error is the cooperative-cancellation signal.
    pub fn is_cancelled(&self) -> bool {
        self.kind == EvalErrorKind::Cancelled
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

/// Quotient with a divisor that is literally zero.
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Modulo with a zero divisor.
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Checked integer arithmetic overflowed in the named operation.
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

/// Operand types invalid for the operator with the given symbol.
pub fn type_mismatch(
    op_symbol: &'static str,
    left: &'static str,
    right: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op_symbol,
        left,
        right,
    })
}

/// No ordering is defined between the two value types.
pub fn not_comparable(left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotComparable { left, right })
}

/// The cooperative-abort signal fired.
pub fn cancelled() -> EvalError {
    EvalError::from_kind(EvalErrorKind::Cancelled)
}
