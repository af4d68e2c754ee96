//! Static choice of a sort algorithm from the estimated memory footprint of the input.

use std::fmt;
use std::mem::size_of;

use log::debug;

use crate::radix::GroupWidth;
use crate::stable::merge_sort;
use crate::unstable::{heapsort, quicksort};

/// Inputs with a footprint below this many bytes are merge sorted, its scratch buffer is cheap
/// enough at that size.
pub const MERGE_SORT_MEMORY_THRESHOLD: usize = 16_332;

/// Every routine this crate offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Merge,
    Quick,
    Heap,
    Bubble,
    Insertion,
    Selection,
    Radix(GroupWidth),
}

impl Algorithm {
    /// The routines that work for any `T: Ord`, in the order a race runs them.
    pub const GENERIC: [Algorithm; 6] = [
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
    ];

    /// Name used in race reports.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Merge => "Merge",
            Algorithm::Quick => "Quick",
            Algorithm::Heap => "Heap",
            Algorithm::Bubble => "Bubble",
            Algorithm::Insertion => "Insertion",
            Algorithm::Selection => "Selection",
            Algorithm::Radix(GroupWidth::Four) => "Radix4",
            Algorithm::Radix(GroupWidth::Eight) => "Radix8",
            Algorithm::Radix(GroupWidth::Sixteen) => "Radix16",
            Algorithm::Radix(GroupWidth::ThirtyTwo) => "Radix32",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Estimated memory used by `len` elements of `T`.
pub fn estimated_footprint<T>(len: usize) -> usize {
    len.saturating_mul(size_of::<T>())
}

/// Picks the algorithm [`sort_automatically`] would use for `len` elements of `T`.
///
/// - Footprint below [`MERGE_SORT_MEMORY_THRESHOLD`]: merge sort, stable and *O*(*n* \* log(*n*)).
/// - Otherwise, unsorted data: quicksort, fast on average and in-place.
/// - Otherwise, sorted data: heapsort, which avoids the quadratic case quicksort has on it.
pub fn choose_algorithm<T>(len: usize, data_is_sorted: bool) -> Algorithm {
    if estimated_footprint::<T>(len) < MERGE_SORT_MEMORY_THRESHOLD {
        Algorithm::Merge
    } else if !data_is_sorted {
        Algorithm::Quick
    } else {
        Algorithm::Heap
    }
}

/// Sorts `v` with the algorithm picked by [`choose_algorithm`] and returns that choice.
///
/// `data_is_sorted` is trusted as given, it is not verified.
pub fn sort_automatically<T: Ord>(v: &mut [T], data_is_sorted: bool) -> Algorithm {
    let algorithm = choose_algorithm::<T>(v.len(), data_is_sorted);
    debug!(
        "sorting {} elements ({} bytes, sorted: {data_is_sorted}) with {algorithm}",
        v.len(),
        estimated_footprint::<T>(v.len()),
    );

    match algorithm {
        Algorithm::Merge => merge_sort::sort(v),
        Algorithm::Quick => quicksort::sort(v),
        _ => heapsort::sort(v),
    }

    algorithm
}
