//! Permutation reference checks.

use std::collections::HashSet;
use std::hash::Hash;

/// `n! / (n - r)!` by straightforward multiplication. Panics on overflow.
pub fn expected_count(n: u64, r: u64) -> u128 {
    assert!(r <= n, "r must not exceed n");
    ((n - r + 1)..=n).map(u128::from).product()
}

/// Returns true if no element appears twice.
pub fn has_unique_elements<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item))
}
