use std::cmp::Ordering;
use std::mem::{size_of, ManuallyDrop};
use std::ptr;

sort_impl!("insertion_sort_shift_left");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place and *O*(*n*^2)
/// worst-case, but *O*(*n*) if the slice is already sorted.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Arrays of zero-sized types are always all-equal, and thus sorted.
    if size_of::<T>() == 0 || len < 2 {
        return;
    }

    let base = v.as_mut_ptr();
    for i in 1..len {
        // SAFETY: `1 <= i < len`, so `base..=base + i` are initialized elements of `v` and
        // `v[..i]` is sorted by the previous iterations.
        unsafe { insert_last(base, i, is_less) };
    }
}

/// Moves `base[last]` left until `base[..=last]` is sorted. `base[..last]` must already be sorted.
///
/// # Safety
/// `last > 0` and `base..=base + last` must be valid, initialized elements of one slice.
unsafe fn insert_last<T, F>(base: *mut T, last: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut pos = last;

    // Already in place, nothing to move.
    if !is_less(&*base.add(pos), &*base.add(pos - 1)) {
        return;
    }

    // The element is held outside the slice from here on. Its old slot is the hole, and the
    // guard writes the element back into wherever the hole is when it drops, on a comparator
    // panic too.
    let mut hole = InsertionHole {
        value: ManuallyDrop::new(base.add(pos).read()),
        dest: base.add(pos),
    };

    loop {
        ptr::copy_nonoverlapping(base.add(pos - 1), base.add(pos), 1);
        pos -= 1;
        hole.dest = base.add(pos);

        // Strictly less, so an equal element to the left stops the shift and order is kept.
        if pos == 0 || !is_less(&hole.value, &*base.add(pos - 1)) {
            break;
        }
    }
}

/// An element taken out of the slice, and the one slot it goes back into on drop.
struct InsertionHole<T> {
    value: ManuallyDrop<T>,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `dest` is the single slot whose previous content was moved out or copied one
        // step right, so writing into it does not leak or duplicate anything.
        unsafe {
            ptr::copy_nonoverlapping(&*self.value, self.dest, 1);
        }
    }
}
