use std::cmp::Ordering;
use std::mem::size_of;
use std::ptr;

sort_impl!("merge_sort_top_down");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) in all
/// cases.
///
/// # Current implementation
///
/// Top-down merge sort, the slice is split at its midpoint and both halves are sorted recursively
/// before being merged. A single scratch buffer the size of the whole slice is allocated once per
/// call and shared by every merge.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// sort_kit_rs::stable::merge_sort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) in all
/// cases.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // The buffer keeps length 0 so it only ever holds shallow copies of elements of `v`, and
    // never runs their destructors, even if `is_less` panics.
    let mut buf = Vec::<T>::with_capacity(len);

    merge_sort_rec(v, buf.as_mut_ptr(), is_less);
}

fn merge_sort_rec<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort_rec(&mut v[..mid], buf, is_less);
    merge_sort_rec(&mut v[mid..], buf, is_less);

    // SAFETY: `buf` was allocated with room for the whole original slice, which is at least
    // `mid` elements, and it never overlaps `v`.
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// On equal elements the one from the left run is taken first, which makes the merge stable.
///
/// # Safety
///
/// `buf` must be valid for writes of `mid` elements and must not overlap `v`.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if mid == 0 || mid >= len {
        return;
    }

    let v = v.as_mut_ptr();

    // SAFETY: see the individual comments.
    unsafe {
        let v_mid = v.add(mid);
        let v_end = v.add(len);

        // The left run is moved into `buf`, leaving a gap of `mid` elements at the front of `v`.
        // From here on `hole` tracks the part of the left run that still lives in `buf`, and where
        // it has to go. If `is_less` panics the drop of `hole` fills the gap with those
        // elements, so `v` ends up holding every object it initially held exactly once.
        ptr::copy_nonoverlapping(v, buf, mid);
        let mut hole = MergeHole {
            start: buf,
            end: buf.add(mid),
            dest: v,
        };

        let mut right = v_mid;

        // `hole.dest` is always strictly below `right` while the left run is not exhausted, so the
        // single element copies below never overlap.
        while hole.start < hole.end && right < v_end {
            let to_copy = if is_less(&*right, &*hole.start) {
                let src = right;
                right = right.add(1);
                src
            } else {
                let src = hole.start;
                hole.start = hole.start.add(1);
                src
            };

            ptr::copy_nonoverlapping(to_copy, hole.dest, 1);
            hole.dest = hole.dest.add(1);
        }

        // Whatever is left of the right run is already in place. Whatever is left of the left
        // run is copied into the remaining gap by the drop of `hole`.
    }
}

// When dropped, copies the range `start..end` into `dest..`.
struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, `start..end` holds initialized elements and `dest`
        // points to a gap of exactly that many elements.
        unsafe {
            let len = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, len);
        }
    }
}
