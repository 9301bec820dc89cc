//! Property-based tests for the disjoint-set engines.
//!
//! Verifies the rank-balanced engine against a naive label-relabel oracle,
//! checks that the compressing and plain find strategies are behaviourally
//! interchangeable, and exercises the algebraic properties merges must
//! satisfy (idempotence, symmetry, partition-count monotonicity) across
//! varied merge workloads.

mod oracle;
mod strategies;
mod types;
