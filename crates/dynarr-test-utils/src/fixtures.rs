//! Deterministic input sequences for sort and container tests.
//!
//! - [`shuffled`] — a seeded permutation of `0..n`.
//! - [`ascending_run`] / [`descending_run`] — the pivot rule's worst cases.
//! - [`with_duplicates`] — seeded values drawn from a small range.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A permutation of `0..n` shuffled with a seeded Fisher-Yates pass.
///
/// The same `(n, seed)` always yields the same sequence.
pub fn shuffled(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<u64> = (0..n as u64).collect();
    for i in (1..n).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        values.swap(i, j);
    }
    values
}

/// `0..n` in ascending order.
pub fn ascending_run(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

/// `0..n` in descending order.
pub fn descending_run(n: usize) -> Vec<u64> {
    (0..n as u64).rev().collect()
}

/// `n` seeded values drawn from `0..distinct`.
///
/// # Panics
///
/// Panics if `distinct` is zero.
pub fn with_duplicates(n: usize, distinct: u64, seed: u64) -> Vec<u64> {
    assert!(distinct > 0, "with_duplicates needs at least one distinct value");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u64() % distinct).collect()
}
