use std::cmp::Ordering;

sort_impl!("bubble_sort_running_index");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// *O*(*n*^2) in all cases. For every index `i` a full pass over the slice swaps `v[i]` with any
/// `v[j]` that is greater than it. Once pass `i` is done `v[..=i]` is sorted.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len {
        for j in 0..len {
            if is_less(&v[i], &v[j]) {
                v.swap(i, j);
            }
        }
    }
}
