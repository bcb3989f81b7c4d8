//! N-ary and chained-comparison operator identities.
//!
//! Every operator step in a Rill graph is one of these two kinds:
//!
//! - [`FoldOp`]: an n-ary operator that folds its operand sequence
//!   left-to-right through a binary combinator.
//! - [`ChainOp`]: a comparison applied pairwise across consecutive operands
//!   and ANDed into a single boolean.
//!
//! The symbol tables here are bijective with the surface token set: the
//! grammar maps each token to exactly one operator, and the formatter maps
//! the operator back to the same token. Symbols are display-only and never
//! influence evaluation.

/// N-ary fold operators.
///
/// Two fold shapes share this enum and are kept deliberately distinct:
/// identity-seeded operators are defined on an empty operand sequence
/// (folding from their algebraic identity), while left-seeded operators
/// require at least one operand, which the grammar guarantees. See
/// [`FoldOp::is_identity_seeded`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FoldOp {
    // Arithmetic
    Sum,
    Difference,
    Product,
    Quotient,
    Modulo,
    Power,

    // Logical
    All,
    Any,
}

impl FoldOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used when rendering a step back to source notation and in error
    /// messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            // Arithmetic
            Self::Sum => "+",
            Self::Difference => "-",
            Self::Product => "*",
            Self::Quotient => "/",
            Self::Modulo => "%",
            Self::Power => "^",
            // Logical
            Self::All => "&&",
            Self::Any => "||",
        }
    }

    /// Whether this operator folds from an algebraic identity element.
    ///
    /// Identity-seeded operators (`+` from 0, `*` from 1, `&&` from true,
    /// `||` from false) are total even over zero operands. The remaining
    /// operators seed the accumulator from the first operand and are
    /// non-associative: left-to-right order is an observable contract.
    pub const fn is_identity_seeded(self) -> bool {
        match self {
            Self::Sum | Self::Product | Self::All | Self::Any => true,
            Self::Difference | Self::Quotient | Self::Modulo | Self::Power => false,
        }
    }
}

/// Chained-comparison operators.
///
/// A chain step with operands `[a, b, c]` evaluates `a ∘ b && b ∘ c`,
/// short-circuiting on the first failing pair.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ChainOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl ChainOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}
