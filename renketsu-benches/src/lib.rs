//! Benchmark support crate for renketsu.
//!
//! Provides seeded synthetic merge workloads and parameter types used by
//! the Criterion benchmarks for union throughput, find strategies, and
//! component materialisation.

pub mod params;
pub mod workload;
