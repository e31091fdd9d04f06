//! Contract-violation errors for the structure generators.
//!
//! Every generator validates its parameters up front and fails the whole
//! call; there are no partial results and nothing is retried. Conditions the
//! original contracts stated in terms of signedness (negative counts,
//! negative distances) are unrepresentable here because the parameters are
//! unsigned.

use std::fmt;

/// Rejected generator parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenError {
    /// `lower > upper` for an inclusive range.
    InvertedBounds { lower: i64, upper: i64 },
    /// A composition must contain at least one element.
    EmptyComposition,
    /// `n * lower_bound` exceeds the target sum.
    InfeasibleSum {
        n: usize,
        target_sum: i64,
        lower_bound: i64,
    },
    /// `target_sum - n * lower_bound` does not fit in an `i64`.
    SlackOverflow { n: usize, target_sum: i64, lower_bound: i64 },
    /// Divisor-search limit outside `[1, 10^12]`.
    LimitOutOfRange { limit: u64 },
    /// `prev_prime` requires its argument to be greater than 2.
    PrimeBoundTooSmall { n: u64 },
    /// A tree must contain at least one node.
    EmptyTree,
    /// Tree root outside `[1, n]`.
    RootOutOfRange { root: u32, n: u32 },
    /// A zero parent-distance window leaves no candidate parents.
    ZeroParentDistance,
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds { lower, upper } => {
                write!(f, "inverted bounds: lower {lower} > upper {upper}")
            }
            Self::EmptyComposition => write!(f, "composition length must be at least 1"),
            Self::InfeasibleSum {
                n,
                target_sum,
                lower_bound,
            } => write!(
                f,
                "infeasible sum: {n} values >= {lower_bound} cannot sum to {target_sum}"
            ),
            Self::SlackOverflow {
                n,
                target_sum,
                lower_bound,
            } => write!(
                f,
                "sum slack overflows i64: n={n}, target_sum={target_sum}, lower_bound={lower_bound}"
            ),
            Self::LimitOutOfRange { limit } => {
                write!(f, "divisor-search limit {limit} outside [1, 10^12]")
            }
            Self::PrimeBoundTooSmall { n } => {
                write!(f, "prev_prime requires n > 2, got {n}")
            }
            Self::EmptyTree => write!(f, "tree must contain at least one node"),
            Self::RootOutOfRange { root, n } => {
                write!(f, "root {root} outside [1, {n}]")
            }
            Self::ZeroParentDistance => {
                write!(f, "max parent distance must be at least 1")
            }
        }
    }
}

impl std::error::Error for GenError {}
