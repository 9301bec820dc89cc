//! Renketsu core library.
//!
//! A disjoint-set (union-find) engine serving as the connectivity substrate
//! for large-scale graph analytics: connected-components detection, community
//! detection passes, and any algorithm that must repeatedly test "are these
//! two nodes in the same partition" and merge partitions over dense node-id
//! spaces that can reach billions of elements.
//!
//! The [`RankedDisjointSet`] engine combines union by depth with full path
//! compression for near-constant amortized cost per operation, keeps its
//! state in two flat paged arrays so merging never allocates, and exposes a
//! pre-flight byte estimate so operators can reject oversized workloads
//! before any data is touched (see [`DisjointSetBuilder`] and
//! [`estimate_ranked_bytes`]).

mod builder;
mod components;
mod error;
mod memory;
mod storage;
mod union_find;

pub use crate::{
    builder::DisjointSetBuilder,
    components::{ComponentId, ComponentsResult, NonContiguousComponentIds},
    error::{DisjointSetError, DisjointSetErrorCode, Result},
    memory::{estimate_ranked_bytes, format_bytes},
    storage::HugeLongArray,
    union_find::{DisjointSet, NO_PARENT, RankedDisjointSet},
};
