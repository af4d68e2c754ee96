// Top-down merge sort with a single whole-slice scratch buffer.
pub mod merge_sort;

// Shift-left insertion sort, O(N) on already sorted input.
pub mod insertion_sort;
