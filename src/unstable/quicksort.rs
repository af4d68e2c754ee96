use std::cmp::Ordering;

sort_impl!("quicksort_hoare_first_pivot");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Classic quicksort that always picks the first element of the sub-slice as pivot and splits
/// with a Hoare partition. Already sorted and reverse sorted inputs hit the quadratic worst-case.
/// Only the shorter side is recursed into, so the stack depth stays *O*(log(*n*)) regardless.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn quicksort<'a, T, F>(mut v: &'a mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let mid = partition(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`. The pivot is in its final position
        // and takes part in neither side, so both sides are strictly shorter than `v`.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its first element.
///
/// Returns the final position of the pivot. Everything before it compares less or equal to the
/// pivot, everything after it greater or equal.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    // The pivot stays at the beginning of the slice while the rest is partitioned. Splitting the
    // slice lets us hold a shared reference to the pivot next to the mutable rest.
    let (pivot, v_without_pivot) = v.split_at_mut(1);
    let pivot = &pivot[0];

    let num_le = partition_hoare(v_without_pivot, pivot, is_less);

    // Place the pivot between the two partitions.
    v.swap(0, num_le);

    num_le
}

/// Hoare partition of `v` against `pivot`.
///
/// The left cursor advances while elements are less than the pivot, the right cursor retreats
/// while elements are greater. Pairs found out of place are swapped and both cursors step past
/// them, which guarantees progress even if every element equals the pivot.
///
/// Returns `n` such that `v[..n]` is less or equal and `v[n..]` greater or equal to `pivot`.
fn partition_hoare<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut l = 0;
    let mut r = v.len();

    // Invariant: `v[..l]` <= pivot and `v[r..]` >= pivot.
    loop {
        while l < r && is_less(&v[l], pivot) {
            l += 1;
        }

        while l < r && is_less(pivot, &v[r - 1]) {
            r -= 1;
        }

        if l >= r {
            break;
        }

        // `v[l]` >= pivot and `v[r - 1]` <= pivot, swapping makes both sides hold again.
        r -= 1;
        v.swap(l, r);
        l += 1;
    }

    l
}
