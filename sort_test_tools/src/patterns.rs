//! Deterministic input generators.
//!
//! All random patterns draw from a generator seeded with [`random_init_seed`], so a failing run can
//! be reproduced by exporting the printed seed as `OVERRIDE_SEED`.

use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

/// Returns the process wide seed. Stays the same for the lifetime of the process.
pub fn random_init_seed() -> u64 {
    *SEED
}

/// A fresh generator seeded with [`random_init_seed`].
pub fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    // An empty range would make Uniform panic, a single value is all we can give then.
    if range.is_empty() {
        return vec![range.start; len];
    }

    let mut rng = new_seeded_rng();
    let dist = Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Values follow a zipfian distribution, lots of duplicates of the low values and a long tail.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    let Ok(dist) = ZipfDistribution::new(len.max(1), exponent) else {
        // Only non-positive exponents are rejected, fall back to uniform noise.
        return random_uniform(len, 0..(len.max(1) as i32));
    };

    let mut rng = new_seeded_rng();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn ascending_saw(len: usize, saw_len: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    let mut vals = random(len);
    for chunk in vals.chunks_mut(saw_len.max(1)) {
        chunk.sort();
    }

    vals
}

pub fn descending_saw(len: usize, saw_len: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    let mut vals = random(len);
    for chunk in vals.chunks_mut(saw_len.max(1)) {
        chunk.sort_by(|a, b| b.cmp(a));
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);
    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort();
    second_half.sort_by(|a, b| b.cmp(a));

    vals
}
