//! Synthetic merge workload generation.
//!
//! All generators are seeded or fully deterministic so benchmark runs are
//! comparable across machines and revisions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Generates `merge_count` uniformly random merge pairs over `capacity`
/// node ids.
#[must_use]
pub fn random_merges(capacity: usize, merge_count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..merge_count)
        .map(|_| (rng.gen_range(0..capacity), rng.gen_range(0..capacity)))
        .collect()
}

/// Generates a tournament workload: adjacent pairs merge first, then pairs
/// of pairs, doubling the stride each round.
///
/// Every round joins two equally deep trees, so the final tree reaches the
/// logarithmic worst-case height that depth-balanced merging allows. This
/// is the workload where the find strategies diverge the most.
#[must_use]
pub fn tournament_merges(capacity: usize) -> Vec<(usize, usize)> {
    let mut merges = Vec::new();
    let mut stride = 1;
    while stride < capacity {
        let mut leader = 0;
        while leader + stride < capacity {
            merges.push((leader, leader + stride));
            leader += stride * 2;
        }
        stride *= 2;
    }
    merges
}
