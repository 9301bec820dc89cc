//! Parameter types shared by the Criterion benchmarks.

use std::fmt;

/// Parameters identifying one union-find benchmark case.
#[derive(Clone, Copy, Debug)]
pub struct UnionFindBenchParams {
    /// Number of node ids in the structure.
    pub capacity: usize,
    /// Number of merges applied per iteration.
    pub merge_count: usize,
}

impl fmt::Display for UnionFindBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}_m{}", self.capacity, self.merge_count)
    }
}
