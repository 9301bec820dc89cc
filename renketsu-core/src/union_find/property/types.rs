//! Type definitions for disjoint-set property-based tests.

/// Merge workload shape for generated fixtures.
///
/// Controls how merge pairs are produced during generation, yielding inputs
/// that stress different aspects of the balancing and compression logic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum MergePattern {
    /// Uniformly random pairs across the whole id range.
    UniformRandom,
    /// Sequential chain `(0,1), (1,2), …` growing one partition node by node.
    Chain,
    /// Every merge names node 0, funnelling the range into a single hub.
    Star,
    /// Merges confined to disjoint blocks, leaving several partitions.
    Blocked,
    /// Random pairs with self-merges and repeats mixed in.
    Degenerate,
}

/// Fixture for disjoint-set property tests.
///
/// Captures the capacity, the merge list, and the pattern used during
/// generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MergeFixture {
    /// Number of node ids in the structure.
    pub capacity: usize,
    /// Merge pairs to apply in order.
    pub merges: Vec<(usize, usize)>,
    /// Workload pattern used during generation.
    pub pattern: MergePattern,
}
