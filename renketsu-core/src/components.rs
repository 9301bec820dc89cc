//! Component materialisation for connectivity results.
//!
//! After all unions are applied, callers map every node to its root and
//! renumber the roots into dense component identifiers for presentation.
//! This module provides that materialisation plus validation of the
//! contiguity invariant downstream consumers rely on. Callers with their own
//! materialisation policy can instead read the raw parent relation via
//! [`DisjointSet::parent`].

use std::collections::HashMap;

use thiserror::Error;
use tracing::{info, instrument};

use crate::union_find::DisjointSet;

/// Identifier assigned to a connected component.
///
/// # Examples
/// ```
/// use renketsu_core::ComponentId;
///
/// let id = ComponentId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    /// Creates a new component identifier.
    #[rustfmt::skip]
    #[must_use]
    pub fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub fn get(self) -> u64 { self.0 }
}

/// Error returned when component identifiers are not contiguous from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NonContiguousComponentIds {
    /// The assignments do not include component `0`.
    #[error("component identifiers must include 0")]
    MissingZero,
    /// The assignments skip identifiers.
    #[error("component identifiers must be contiguous without gaps")]
    Gap,
    /// The assignments require identifiers beyond the host pointer width.
    #[error("component identifiers exceed the host pointer-width limit")]
    Overflow,
}

/// Dense per-node component assignments produced from a disjoint-set
/// structure.
///
/// # Examples
/// ```
/// use renketsu_core::{ComponentId, ComponentsResult};
///
/// let result = ComponentsResult::from_assignments(vec![
///     ComponentId::new(0),
///     ComponentId::new(1),
///     ComponentId::new(0),
/// ]);
/// assert_eq!(result.assignments().len(), 3);
/// assert_eq!(result.component_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentsResult {
    assignments: Vec<ComponentId>,
    component_count: usize,
}

impl ComponentsResult {
    /// Materialises dense component assignments from `sets`.
    ///
    /// Every node id in `[0, capacity)` is resolved to its root, compressing
    /// the structure as a side effect, and roots are renumbered into
    /// contiguous component ids in order of first appearance. Identical
    /// merge sequences therefore yield identical assignments.
    ///
    /// # Examples
    /// ```
    /// use renketsu_core::{ComponentsResult, DisjointSet, RankedDisjointSet};
    ///
    /// let mut sets = RankedDisjointSet::new(5)?;
    /// sets.union(0, 1);
    /// sets.union(3, 4);
    /// let result = ComponentsResult::from_disjoint_sets(&mut sets);
    /// assert_eq!(result.component_count(), 3);
    /// assert_eq!(result.assignments()[0], result.assignments()[1]);
    /// assert_eq!(result.assignments()[0].get(), 0);
    /// # Ok::<(), renketsu_core::DisjointSetError>(())
    /// ```
    #[instrument(
        name = "components.materialise",
        skip(sets),
        fields(capacity = sets.capacity()),
    )]
    pub fn from_disjoint_sets<S: DisjointSet>(sets: &mut S) -> Self {
        let capacity = sets.capacity();
        let mut ids_by_root: HashMap<usize, u64> = HashMap::new();
        let mut assignments = Vec::with_capacity(capacity);
        for node in 0..capacity {
            let root = sets.find(node);
            let next_id = ids_by_root.len() as u64;
            let id = *ids_by_root.entry(root).or_insert(next_id);
            assignments.push(ComponentId::new(id));
        }
        let component_count = ids_by_root.len();
        info!(components = component_count, "materialised component assignments");
        Self {
            assignments,
            component_count,
        }
    }

    /// Builds a result from explicit component assignments.
    ///
    /// Component identifiers must start at zero and be contiguous. Use
    /// [`Self::try_from_assignments`] to handle arbitrary identifiers.
    ///
    /// # Panics
    /// Panics when the identifiers are not contiguous from zero.
    #[must_use]
    pub fn from_assignments(assignments: Vec<ComponentId>) -> Self {
        Self::try_from_assignments(assignments)
            .expect("component identifiers must start at zero and be contiguous")
    }

    /// Attempts to build a result from component assignments.
    ///
    /// The distinct identifiers must form exactly `0..k`. An empty
    /// `assignments` vector is accepted and yields `component_count == 0`.
    ///
    /// # Errors
    /// Returns [`NonContiguousComponentIds::MissingZero`] when the
    /// assignments omit component `0`,
    /// [`NonContiguousComponentIds::Gap`] when identifiers skip values, and
    /// [`NonContiguousComponentIds::Overflow`] when the identifier range
    /// does not fit the host pointer width.
    pub fn try_from_assignments(
        assignments: Vec<ComponentId>,
    ) -> Result<Self, NonContiguousComponentIds> {
        if assignments.is_empty() {
            return Ok(Self {
                assignments,
                component_count: 0,
            });
        }

        let mut distinct: Vec<u64> = assignments.iter().map(|id| id.get()).collect();
        distinct.sort_unstable();
        distinct.dedup();

        if distinct[0] != 0 {
            return Err(NonContiguousComponentIds::MissingZero);
        }
        let max_id = distinct[distinct.len() - 1];
        let expected = max_id
            .checked_add(1)
            .ok_or(NonContiguousComponentIds::Overflow)?;
        let component_count =
            usize::try_from(expected).map_err(|_| NonContiguousComponentIds::Overflow)?;
        if distinct.len() != component_count {
            return Err(NonContiguousComponentIds::Gap);
        }

        Ok(Self {
            assignments,
            component_count,
        })
    }

    /// Returns the per-node assignments in node-id order.
    #[must_use]
    pub fn assignments(&self) -> &[ComponentId] {
        &self.assignments
    }

    /// Returns how many distinct components exist within the assignments.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }
}
