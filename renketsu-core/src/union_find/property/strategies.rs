//! Strategy builders for disjoint-set property-based tests.
//!
//! Produces merge workloads across the patterns in
//! [`MergePattern`](super::types::MergePattern), seeded through `SmallRng`
//! so rstest cases can pin interesting seeds while proptest explores the
//! seed space.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MergeFixture, MergePattern};

/// Minimum node count for generated fixtures.
const MIN_NODES: usize = 4;
/// Maximum node count for generated fixtures.
const MAX_NODES: usize = 64;

/// Generates merge fixtures covering all five workload patterns.
pub(super) fn merge_fixture_strategy() -> impl Strategy<Value = MergeFixture> {
    (merge_pattern_strategy(), any::<u64>()).prop_map(|(pattern, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(pattern, &mut rng)
    })
}

fn merge_pattern_strategy() -> impl Strategy<Value = MergePattern> {
    prop_oneof![
        Just(MergePattern::UniformRandom),
        Just(MergePattern::Chain),
        Just(MergePattern::Star),
        Just(MergePattern::Blocked),
        Just(MergePattern::Degenerate),
    ]
}

/// Generates a fixture for a specific workload pattern.
///
/// Useful for targeted rstest cases where the pattern is chosen explicitly
/// rather than sampled by proptest.
pub(super) fn generate_fixture(pattern: MergePattern, rng: &mut SmallRng) -> MergeFixture {
    match pattern {
        MergePattern::UniformRandom => generate_uniform_random(rng),
        MergePattern::Chain => generate_chain(rng),
        MergePattern::Star => generate_star(rng),
        MergePattern::Blocked => generate_blocked(rng),
        MergePattern::Degenerate => generate_degenerate(rng),
    }
}

fn generate_uniform_random(rng: &mut SmallRng) -> MergeFixture {
    let capacity = rng.gen_range(MIN_NODES..=MAX_NODES);
    let merge_count = rng.gen_range(0..capacity * 2);
    let merges = (0..merge_count)
        .map(|_| (rng.gen_range(0..capacity), rng.gen_range(0..capacity)))
        .collect();
    MergeFixture {
        capacity,
        merges,
        pattern: MergePattern::UniformRandom,
    }
}

fn generate_chain(rng: &mut SmallRng) -> MergeFixture {
    let capacity = rng.gen_range(MIN_NODES..=MAX_NODES);
    let merges = (1..capacity).map(|node| (node - 1, node)).collect();
    MergeFixture {
        capacity,
        merges,
        pattern: MergePattern::Chain,
    }
}

fn generate_star(rng: &mut SmallRng) -> MergeFixture {
    let capacity = rng.gen_range(MIN_NODES..=MAX_NODES);
    let merges = (1..capacity).map(|node| (0, node)).collect();
    MergeFixture {
        capacity,
        merges,
        pattern: MergePattern::Star,
    }
}

fn generate_blocked(rng: &mut SmallRng) -> MergeFixture {
    let capacity = rng.gen_range(MIN_NODES..=MAX_NODES);
    let block_size = rng.gen_range(2..=capacity.div_ceil(2));
    let mut merges = Vec::new();
    for node in 1..capacity {
        // Skip merges that would bridge two blocks.
        if node % block_size != 0 {
            merges.push((node - 1, node));
        }
    }
    MergeFixture {
        capacity,
        merges,
        pattern: MergePattern::Blocked,
    }
}

fn generate_degenerate(rng: &mut SmallRng) -> MergeFixture {
    let capacity = rng.gen_range(MIN_NODES..=MAX_NODES);
    let merge_count = rng.gen_range(0..capacity * 3);
    let mut merges = Vec::with_capacity(merge_count);
    for _ in 0..merge_count {
        let p = rng.gen_range(0..capacity);
        let q = if rng.gen_bool(0.3) {
            // Self-merge: must be a no-op.
            p
        } else {
            rng.gen_range(0..capacity)
        };
        merges.push((p, q));
        if rng.gen_bool(0.2) {
            // Immediate repeat: must be idempotent.
            merges.push((p, q));
        }
    }
    MergeFixture {
        capacity,
        merges,
        pattern: MergePattern::Degenerate,
    }
}
