//! Builder utilities for configuring disjoint-set construction.
//!
//! Exposes capacity and memory-budget validation performed before any
//! backing storage is allocated, so operators can reject oversized
//! workloads from the estimate alone.

use tracing::{instrument, warn};

use crate::{
    error::{DisjointSetError, Result},
    memory::{estimate_ranked_bytes, format_bytes},
    union_find::RankedDisjointSet,
};

/// Configures and constructs [`RankedDisjointSet`] instances.
///
/// # Examples
/// ```
/// use renketsu_core::{DisjointSet, DisjointSetBuilder};
///
/// let sets = DisjointSetBuilder::new(1_000)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(sets.capacity(), 1_000);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSetBuilder {
    capacity: usize,
    memory_budget: Option<u64>,
}

impl DisjointSetBuilder {
    /// Creates a builder for a structure over `capacity` node ids.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            memory_budget: None,
        }
    }

    /// Caps the estimated byte footprint the build may require.
    ///
    /// # Examples
    /// ```
    /// use renketsu_core::DisjointSetBuilder;
    ///
    /// let builder = DisjointSetBuilder::new(1_000).with_memory_budget(1 << 20);
    /// assert_eq!(builder.memory_budget(), Some(1 << 20));
    /// ```
    #[must_use]
    pub fn with_memory_budget(mut self, budget_bytes: u64) -> Self {
        self.memory_budget = Some(budget_bytes);
        self
    }

    /// Returns the configured capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the configured memory budget, if any.
    #[must_use]
    pub fn memory_budget(&self) -> Option<u64> {
        self.memory_budget
    }

    /// Returns the estimated byte footprint of the structure this builder
    /// would construct.
    ///
    /// # Examples
    /// ```
    /// use renketsu_core::{DisjointSetBuilder, estimate_ranked_bytes};
    ///
    /// let builder = DisjointSetBuilder::new(1_000);
    /// assert_eq!(builder.estimated_bytes(), estimate_ranked_bytes(1_000));
    /// ```
    #[must_use]
    pub fn estimated_bytes(&self) -> u64 {
        estimate_ranked_bytes(self.capacity)
    }

    /// Validates the configuration against the memory budget and constructs
    /// the structure.
    ///
    /// The estimate is computed before any allocation, so an oversized
    /// workload is rejected without touching memory proportional to the
    /// capacity.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::BudgetExceeded`] when the estimate is
    /// over the configured budget, and
    /// [`DisjointSetError::AllocationFailed`] when the backing arrays
    /// cannot be allocated.
    #[instrument(
        name = "union_find.build",
        err,
        skip(self),
        fields(capacity = self.capacity, budget = ?self.memory_budget),
    )]
    pub fn build(self) -> Result<RankedDisjointSet> {
        let required_bytes = self.estimated_bytes();
        if let Some(budget_bytes) = self.memory_budget {
            if required_bytes > budget_bytes {
                warn!(
                    required = %format_bytes(required_bytes),
                    budget = %format_bytes(budget_bytes),
                    "rejecting construction over memory budget"
                );
                return Err(DisjointSetError::BudgetExceeded {
                    capacity: self.capacity,
                    required_bytes,
                    budget_bytes,
                });
            }
        }
        RankedDisjointSet::new(self.capacity)
    }
}
