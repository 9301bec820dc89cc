//! Paged long-array storage for node-indexed relations.
//!
//! Connectivity state over billions of nodes needs integer arrays whose
//! length comfortably exceeds what a single contiguous allocation can be
//! relied upon to provide. [`HugeLongArray`] splits the index space into
//! fixed-size pages so allocation stays incremental, failure surfaces as an
//! error rather than an abort, and the byte footprint of a candidate array
//! can be estimated before any page exists.

use crate::error::DisjointSetError;

/// Power-of-two exponent of the page size.
const PAGE_SHIFT: u32 = 14;
/// Number of elements per page (16384 elements, 128 KiB of `i64`s).
const PAGE_SIZE: usize = 1 << PAGE_SHIFT;
/// Mask extracting the in-page index.
const PAGE_MASK: usize = PAGE_SIZE - 1;

/// Size of a single element in bytes.
const ELEMENT_BYTES: u64 = size_of::<i64>() as u64;
/// Estimated overhead per page: the boxed-slice pointer and length stored in
/// the page table.
const PAGE_OVERHEAD_BYTES: u64 = 16;
/// Estimated overhead of the struct itself: page-table `Vec` header plus the
/// length field.
const STRUCT_OVERHEAD_BYTES: u64 = 32;

/// Fixed-capacity, index-addressable sequence of `i64` values backed by
/// fixed-size pages.
///
/// # Examples
/// ```
/// use renketsu_core::HugeLongArray;
///
/// let mut array = HugeLongArray::new(3)?;
/// array.fill(-1);
/// array.set(1, 7);
/// array.add_to(1, 2);
/// assert_eq!(array.get(0), -1);
/// assert_eq!(array.get(1), 9);
/// assert_eq!(array.len(), 3);
/// # Ok::<(), renketsu_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HugeLongArray {
    pages: Vec<Box<[i64]>>,
    len: usize,
}

impl HugeLongArray {
    /// Allocates an array of `len` zero-initialised elements.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::AllocationFailed`] when the backing pages
    /// cannot be reserved.
    pub fn new(len: usize) -> Result<Self, DisjointSetError> {
        let allocation_failed = || DisjointSetError::AllocationFailed {
            requested_bytes: Self::memory_estimation(len),
        };

        let page_count = len.div_ceil(PAGE_SIZE);
        let mut pages = Vec::new();
        pages
            .try_reserve_exact(page_count)
            .map_err(|_| allocation_failed())?;

        let mut remaining = len;
        for _ in 0..page_count {
            let page_len = remaining.min(PAGE_SIZE);
            let mut page = Vec::new();
            page.try_reserve_exact(page_len)
                .map_err(|_| allocation_failed())?;
            page.resize(page_len, 0);
            pages.push(page.into_boxed_slice());
            remaining -= page_len;
        }

        Ok(Self { pages, len })
    }

    /// Returns the value at `index`.
    ///
    /// # Panics
    /// Panics when `index` is outside `[0, len)`.
    #[must_use]
    pub fn get(&self, index: usize) -> i64 {
        self.check_bounds(index);
        self.pages[index >> PAGE_SHIFT][index & PAGE_MASK]
    }

    /// Writes `value` at `index`.
    ///
    /// # Panics
    /// Panics when `index` is outside `[0, len)`.
    pub fn set(&mut self, index: usize, value: i64) {
        self.check_bounds(index);
        self.pages[index >> PAGE_SHIFT][index & PAGE_MASK] = value;
    }

    /// Adds `delta` to the value at `index` in place.
    ///
    /// # Panics
    /// Panics when `index` is outside `[0, len)`.
    pub fn add_to(&mut self, index: usize, delta: i64) {
        self.check_bounds(index);
        self.pages[index >> PAGE_SHIFT][index & PAGE_MASK] += delta;
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: i64) {
        for page in &mut self.pages {
            page.fill(value);
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the estimated heap footprint in bytes of an array of `len`
    /// elements, computable before allocation.
    ///
    /// Saturating arithmetic keeps the estimate total even for absurd
    /// lengths instead of panicking in pre-flight checks.
    #[must_use]
    pub fn memory_estimation(len: usize) -> u64 {
        let page_count = len.div_ceil(PAGE_SIZE) as u64;
        (len as u64)
            .saturating_mul(ELEMENT_BYTES)
            .saturating_add(page_count.saturating_mul(PAGE_OVERHEAD_BYTES))
            .saturating_add(STRUCT_OVERHEAD_BYTES)
    }

    fn check_bounds(&self, index: usize) {
        assert!(
            index < self.len,
            "index {index} out of bounds for HugeLongArray of length {}",
            self.len
        );
    }
}
