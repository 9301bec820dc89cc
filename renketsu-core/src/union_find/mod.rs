//! Disjoint-set (union-find) contract and engines.
//!
//! Connectivity algorithms need three capabilities: resolve a node to the
//! representative of its partition, merge two partitions, and know the valid
//! id range. They are expressed against the [`DisjointSet`] trait so callers
//! stay decoupled from the balancing and compression strategy of the
//! concrete engine.

mod ranked;

#[cfg(test)]
mod property;

pub use self::ranked::RankedDisjointSet;

use crate::storage::HugeLongArray;

/// Sentinel parent value marking a node as the root of its partition.
pub const NO_PARENT: i64 = -1;

/// Capability contract every union-find variant satisfies.
///
/// [`DisjointSet::find`] takes `&mut self` deliberately: the compressing
/// strategy rewrites parent pointers as a side effect of what reads like a
/// query, and hiding that behind interior mutability would misrepresent the
/// concurrency contract. [`DisjointSet::find_plain`] is the non-mutating
/// baseline. Both strategies return the same root for any fixed structure
/// state.
///
/// Instances assume exclusive, single-threaded access for the duration of a
/// run; callers needing a parallel merge pre-pass must partition the
/// workload over disjoint id ranges or guard every call with external
/// mutual exclusion.
pub trait DisjointSet {
    /// Returns the root of the partition containing `node`, rewriting every
    /// visited node's parent to point directly at that root.
    ///
    /// # Panics
    /// Panics when `node` is outside `[0, capacity)`.
    fn find(&mut self, node: usize) -> usize;

    /// Returns the root of the partition containing `node` without mutating
    /// any parent pointer.
    ///
    /// Worst case is linear in the current tree depth, with no amortized
    /// guarantee; use [`DisjointSet::find`] on hot paths.
    ///
    /// # Panics
    /// Panics when `node` is outside `[0, capacity)`.
    fn find_plain(&self, node: usize) -> usize;

    /// Merges the partitions containing `p` and `q`.
    ///
    /// A no-op when both arguments already share a partition, so repeated
    /// identical merges are idempotent.
    ///
    /// # Panics
    /// Panics when `p` or `q` is outside `[0, capacity)`.
    fn union(&mut self, p: usize, q: usize);

    /// Returns the fixed node-id upper bound set at construction.
    fn capacity(&self) -> usize;

    /// Returns the raw parent relation for bulk consumption.
    ///
    /// Entries equal to [`NO_PARENT`] mark roots; every other entry is the
    /// id of a node closer to the root. Following parent entries from any
    /// node terminates at a root.
    fn parent(&self) -> &HugeLongArray;

    /// Returns whether `p` and `q` are currently in the same partition,
    /// compressing both lookup paths.
    ///
    /// # Panics
    /// Panics when `p` or `q` is outside `[0, capacity)`.
    fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }
}
