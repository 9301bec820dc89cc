//! Pre-flight memory estimation for disjoint-set structures.
//!
//! Operators planning a connectivity run over billions of nodes need the
//! byte footprint of a candidate structure before touching any data, so the
//! estimate is a pure function of the intended node count and never
//! allocates.

use crate::storage::HugeLongArray;

/// Estimated overhead of a `RankedDisjointSet` value beyond its two backing
/// arrays: the capacity field and padding.
const STRUCT_OVERHEAD_BYTES: u64 = 16;

/// Returns the estimated heap footprint in bytes of a rank-balanced
/// disjoint-set structure over `node_count` nodes.
///
/// The structure keeps one parent entry and one depth entry per node, so
/// the estimate is two per-node array footprints plus fixed overhead. The
/// arithmetic saturates, keeping pre-flight checks total for any input.
///
/// # Examples
/// ```
/// use renketsu_core::estimate_ranked_bytes;
///
/// let bytes = estimate_ranked_bytes(1_000_000);
/// assert!(bytes >= 16_000_000, "two i64 entries per node dominate");
/// ```
#[must_use]
pub fn estimate_ranked_bytes(node_count: usize) -> u64 {
    HugeLongArray::memory_estimation(node_count)
        .saturating_mul(2)
        .saturating_add(STRUCT_OVERHEAD_BYTES)
}

/// Formats a byte count as a human-readable string using binary units.
///
/// Returns values like `"0 B"`, `"1.0 KiB"`, `"2.4 GiB"`, with one decimal
/// place for values of at least 1 KiB.
///
/// # Examples
/// ```
/// use renketsu_core::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1536), "1.5 KiB");
/// assert_eq!(format_bytes(1_073_741_824), "1.0 GiB");
/// ```
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    const GIB: u64 = 1024 * MIB;
    const TIB: u64 = 1024 * GIB;

    if bytes >= TIB {
        format!("{:.1} TiB", bytes as f64 / TIB as f64)
    } else if bytes >= GIB {
        format!("{:.1} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}
