// In-place max-heap sort, O(N x log(N)) worst-case.
pub mod heapsort;

// First element pivot quicksort with a Hoare partition.
pub mod quicksort;

// Swap every out of order pair against a running index.
pub mod bubble_sort;

// Repeatedly swap the minimum of the unsorted suffix into place.
pub mod selection_sort;
