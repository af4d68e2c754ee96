use std::cmp::Ordering;

sort_impl!("selection_sort");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// In-place and *O*(*n*^2) in all cases.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        // The first minimum of the unsorted suffix wins.
        let mut min_pos = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min_pos]) {
                min_pos = j;
            }
        }

        if min_pos != i {
            v.swap(min_pos, i);
        }
    }
}
