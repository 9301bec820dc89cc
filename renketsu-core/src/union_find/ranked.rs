//! Rank-balanced disjoint-set engine.
//!
//! Union by depth bounds tree height logarithmically under adversarial merge
//! orders, and full path compression flattens trees during queries; combined
//! they give the classic near-constant amortized cost per operation. State
//! lives in two flat `i64` arrays indexed by node id, so neither `find` nor
//! `union` ever allocates.

use tracing::debug;

use crate::{
    error::DisjointSetError,
    memory::estimate_ranked_bytes,
    storage::HugeLongArray,
    union_find::{DisjointSet, NO_PARENT},
};

/// Union-find over a fixed, dense node-id range using union by depth and
/// full path compression.
///
/// Every node starts as a singleton root. `union` attaches the shallower
/// tree under the deeper tree's root; on equal depths the second argument's
/// root attaches under the first's, so identical merge sequences always
/// rebuild identical trees.
///
/// # Examples
/// ```
/// use renketsu_core::{DisjointSet, RankedDisjointSet};
///
/// let mut sets = RankedDisjointSet::new(4)?;
/// sets.union(0, 1);
/// sets.union(2, 3);
/// assert!(sets.connected(0, 1));
/// assert!(!sets.connected(1, 2));
/// # Ok::<(), renketsu_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RankedDisjointSet {
    parent: HugeLongArray,
    depth: HugeLongArray,
    capacity: usize,
}

impl RankedDisjointSet {
    /// Creates a structure of `capacity` singleton partitions.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::AllocationFailed`] when the backing
    /// arrays cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self, DisjointSetError> {
        let mut parent = HugeLongArray::new(capacity)?;
        let depth = HugeLongArray::new(capacity)?;
        parent.fill(NO_PARENT);
        debug!(capacity, "allocated disjoint-set backing storage");
        Ok(Self {
            parent,
            depth,
            capacity,
        })
    }

    /// Returns the estimated heap footprint in bytes of an instance over
    /// `node_count` nodes, computable before construction.
    ///
    /// See [`estimate_ranked_bytes`].
    #[must_use]
    pub fn memory_estimation(node_count: usize) -> u64 {
        estimate_ranked_bytes(node_count)
    }
}

impl DisjointSet for RankedDisjointSet {
    fn find(&mut self, node: usize) -> usize {
        let root = self.find_plain(node);
        let mut current = node;
        while current != root {
            // current is not the root, so its parent entry is a node id.
            let next = self.parent.get(current);
            self.parent.set(current, root as i64);
            current = next as usize;
        }
        root
    }

    fn find_plain(&self, node: usize) -> usize {
        let mut current = node;
        loop {
            let next = self.parent.get(current);
            if next == NO_PARENT {
                return current;
            }
            current = next as usize;
        }
    }

    fn union(&mut self, p: usize, q: usize) {
        let p_root = self.find(p);
        let q_root = self.find(q);
        if p_root == q_root {
            return;
        }
        let p_depth = self.depth.get(p_root);
        let q_depth = self.depth.get(q_root);
        if p_depth < q_depth {
            self.parent.set(p_root, q_root as i64);
        } else if p_depth > q_depth {
            self.parent.set(q_root, p_root as i64);
        } else {
            // Fixed tie-break: the second argument's root goes under the
            // first's.
            self.parent.set(q_root, p_root as i64);
            self.depth.add_to(p_root, q_depth + 1);
        }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn parent(&self) -> &HugeLongArray {
        &self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_union_leaves_parent_and_depth_untouched() {
        let mut sets = RankedDisjointSet::new(3).expect("allocation must succeed");
        let pristine = sets.clone();
        sets.union(1, 1);
        assert_eq!(sets.parent, pristine.parent);
        assert_eq!(sets.depth, pristine.depth);
    }

    #[test]
    fn equal_depth_union_attaches_second_under_first() {
        let mut sets = RankedDisjointSet::new(2).expect("allocation must succeed");
        sets.union(0, 1);
        assert_eq!(sets.parent.get(1), 0);
        assert_eq!(sets.parent.get(0), NO_PARENT);
        assert_eq!(sets.depth.get(0), 1);
        assert_eq!(sets.depth.get(1), 0, "depth of a non-root is never read");
    }

    #[test]
    fn shallower_tree_attaches_under_deeper_root() {
        let mut sets = RankedDisjointSet::new(3).expect("allocation must succeed");
        sets.union(0, 1);
        // Root 0 now has depth 1; singleton 2 has depth 0.
        sets.union(2, 0);
        assert_eq!(sets.parent.get(2), 0, "shallow root joins the deep tree");
        assert_eq!(sets.depth.get(0), 1, "absorbing a shallower tree keeps the depth");
    }

    #[test]
    fn equal_depth_union_accumulates_depth() {
        let mut sets = RankedDisjointSet::new(4).expect("allocation must succeed");
        sets.union(0, 1);
        sets.union(2, 3);
        // Both roots sit at depth 1, so merging them adds depth(q) + 1.
        sets.union(0, 2);
        assert_eq!(sets.parent.get(2), 0);
        assert_eq!(sets.depth.get(0), 3);
    }

    #[test]
    fn compressing_find_rewrites_the_visited_path() {
        let mut sets = RankedDisjointSet::new(4).expect("allocation must succeed");
        sets.union(0, 1);
        sets.union(2, 3);
        sets.union(0, 2);
        // Node 3 still points at 2, two hops from the root.
        assert_eq!(sets.parent.get(3), 2);
        assert_eq!(sets.find(3), 0);
        assert_eq!(sets.parent.get(3), 0, "find must rewrite 3 to the root");
    }

    #[test]
    fn plain_find_leaves_the_path_alone() {
        let mut sets = RankedDisjointSet::new(4).expect("allocation must succeed");
        sets.union(0, 1);
        sets.union(2, 3);
        sets.union(0, 2);
        assert_eq!(sets.find_plain(3), 0);
        assert_eq!(sets.parent.get(3), 2, "plain find must not rewrite pointers");
    }
}
