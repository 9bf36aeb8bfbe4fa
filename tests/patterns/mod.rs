#![allow(dead_code)]

//! Input patterns shared by the test grids and the benchmarks.

use std::env;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

// Set SORT_TEST_SEED to reproduce a failing run.
static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("SORT_TEST_SEED")
        .ok()
        .and_then(|seed| seed.parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Full `i32` range, extreme values included.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: std::ops::Range<i32>) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Few distinct values with a heavy skew towards small ones, lots of duplicates of the pivot.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len.max(1), exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Ascending runs of roughly `len / saw_count` elements each.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    let chunk = (len / saw_count.max(1)).max(1);
    (0..len).map(|i| (i % chunk) as i32).collect()
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let half = len / 2;
    (0..len)
        .map(|i| if i < half { i as i32 } else { (len - i) as i32 })
        .collect()
}
