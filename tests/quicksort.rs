use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sort_kit_rs::unstable::quicksort;

#[test]
fn matches_reference_on_small_random_arrays() {
    // Small partitions are where an off-by-one around the pivot would leave the first elements
    // unsorted, so brute force every length up to 12 with a narrow value range.
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for len in 0..=12 {
        for _ in 0..2_000 {
            let mut v = (0..len).map(|_| rng.gen_range(0..6)).collect::<Vec<i32>>();
            let mut expected = v.clone();
            expected.sort();

            let original = v.clone();
            quicksort::sort(&mut v);

            assert_eq!(v, expected, "input: {original:?}");
        }
    }
}

#[test]
fn all_equal_terminates() {
    let mut v = vec![7u8; 50_000];
    quicksort::sort(&mut v);
    assert!(v.iter().all(|&x| x == 7));
    assert_eq!(v.len(), 50_000);
}

#[test]
fn sorted_input_does_not_overflow_the_stack() {
    // First element pivot makes this the quadratic case, the recursion depth has to stay small.
    let mut ascending = (0..20_000).collect::<Vec<u32>>();
    quicksort::sort(&mut ascending);
    assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

    let mut descending = (0..20_000).rev().collect::<Vec<u32>>();
    quicksort::sort(&mut descending);
    assert_eq!(descending, (0..20_000).collect::<Vec<u32>>());
}
