//! Error types for the renketsu core library.
//!
//! Construction is the only fallible surface: once a structure exists with a
//! valid capacity, `find` and `union` have no recoverable error conditions.
//! Out-of-range node ids are caller programming errors and panic instead of
//! returning an error (see the `# Panics` sections on [`crate::DisjointSet`]).

use thiserror::Error;

/// Errors returned while planning or constructing a disjoint-set structure.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum DisjointSetError {
    /// The backing storage could not be allocated.
    #[error("failed to allocate {requested_bytes} bytes of backing storage")]
    AllocationFailed {
        /// Number of bytes the failed reservation asked for.
        requested_bytes: u64,
    },
    /// The pre-flight estimate exceeded the configured memory budget.
    #[error(
        "capacity {capacity} needs an estimated {required_bytes} bytes, \
         exceeding the {budget_bytes} byte budget"
    )]
    BudgetExceeded {
        /// Capacity the caller asked for.
        capacity: usize,
        /// Estimated bytes required for that capacity.
        required_bytes: u64,
        /// Configured budget in bytes.
        budget_bytes: u64,
    },
}

impl DisjointSetError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> DisjointSetErrorCode {
        match self {
            Self::AllocationFailed { .. } => DisjointSetErrorCode::AllocationFailed,
            Self::BudgetExceeded { .. } => DisjointSetErrorCode::BudgetExceeded,
        }
    }
}

/// Machine-readable error codes for [`DisjointSetError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DisjointSetErrorCode {
    /// The backing storage could not be allocated.
    AllocationFailed,
    /// The pre-flight estimate exceeded the configured memory budget.
    BudgetExceeded,
}

impl DisjointSetErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllocationFailed => "ALLOCATION_FAILED",
            Self::BudgetExceeded => "BUDGET_EXCEEDED",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, DisjointSetError>;
