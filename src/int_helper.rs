use std::collections::BTreeSet;

use rand::Rng;

/// Returns the smallest key not yet taken, the way an auto-increment unique key would pick it.
///
/// The distinct values are walked in ascending order next to the candidates `0, 1, 2, ...`, and
/// the first candidate below the value at its position is returned. Without such a gap the number
/// of distinct values is returned, `0` for no values at all.
///
/// `[5, 4, 3, 2, 1, 0, 7, 7, 7]` yields `6`, `[5, 4, 3, 2, 1, 0, 6, 7]` yields `8`.
pub fn unique_key<I>(values: I) -> i32
where
    I: IntoIterator<Item = i32>,
{
    let ordered = values.into_iter().collect::<BTreeSet<i32>>();

    for (candidate, &value) in (0i64..).zip(ordered.iter()) {
        if candidate < i64::from(value) {
            return candidate as i32;
        }
    }

    i32::try_from(ordered.len()).unwrap_or(i32::MAX)
}

/// Draws a random integer from `rng`, never negative if `strictly_positive` is set.
pub fn random_integer<R: Rng>(rng: &mut R, strictly_positive: bool) -> i32 {
    if strictly_positive {
        rng.gen_range(0..=i32::MAX)
    } else {
        rng.gen()
    }
}
