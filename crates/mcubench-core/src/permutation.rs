//! Lazy permutation generator.
//!
//! [`Permutations`] walks every r-length ordering of a pool without
//! materializing them. State is an index array plus a cycle-counter array,
//! advanced one emission at a time by the decrement-and-rotate scheme.

/// Iterator over all r-length orderings of a pool, in lexicographic order
/// relative to the pool's own ordering.
///
/// The sequence is finite and non-restartable. Each emission is a fresh
/// `Vec<T>` cloned out of the pool.
///
/// # Example
///
/// ```
/// use mcubench_core::Permutations;
///
/// let perms: Vec<Vec<u32>> = Permutations::with_len(vec![0, 1, 2], 2).collect();
/// assert_eq!(
///     perms,
///     vec![
///         vec![0, 1], vec![0, 2],
///         vec![1, 0], vec![1, 2],
///         vec![2, 0], vec![2, 1],
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    pool: Vec<T>,
    len: usize,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<T: Clone> Permutations<T> {
    /// Creates a generator of full-length orderings of `pool`.
    pub fn new(pool: impl IntoIterator<Item = T>) -> Self {
        let pool: Vec<T> = pool.into_iter().collect();
        let len = pool.len();
        Self::from_pool(pool, len)
    }

    /// Creates a generator of `len`-length orderings of `pool`.
    ///
    /// A `len` larger than the pool yields nothing.
    pub fn with_len(pool: impl IntoIterator<Item = T>, len: usize) -> Self {
        Self::from_pool(pool.into_iter().collect(), len)
    }

    fn from_pool(pool: Vec<T>, len: usize) -> Self {
        let n = pool.len();
        let exhausted = len > n;
        let cycles = if exhausted {
            Vec::new()
        } else {
            (n - len + 1..=n).rev().collect()
        };
        Self {
            pool,
            len,
            indices: (0..n).collect(),
            cycles,
            started: false,
            exhausted,
        }
    }

    /// Returns the pool size `n`.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Returns the output length `r`.
    pub fn output_len(&self) -> usize {
        self.len
    }

    fn emit(&self) -> Vec<T> {
        self.indices[..self.len]
            .iter()
            .map(|&i| self.pool[i].clone())
            .collect()
    }

    // Moves the index state to the next ordering. Returns false once every
    // ordering has been produced.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        if n == 0 {
            return false;
        }
        for i in (0..self.len).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = self.cycles[i];
                self.indices.swap(i, n - j);
                return true;
            }
        }
        false
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.emit());
        }
        if self.advance() {
            Some(self.emit())
        } else {
            self.exhausted = true;
            None
        }
    }
}

impl<T: Clone> std::iter::FusedIterator for Permutations<T> {}

/// Returns `n! / (n - r)!`, the number of r-length orderings of n items.
///
/// Returns `Some(0)` when `r > n` and `None` if the count overflows `u128`.
///
/// # Example
///
/// ```
/// use mcubench_core::permutation_count;
///
/// assert_eq!(permutation_count(5, 2), Some(20));
/// assert_eq!(permutation_count(3, 0), Some(1));
/// assert_eq!(permutation_count(2, 3), Some(0));
/// ```
pub fn permutation_count(n: usize, r: usize) -> Option<u128> {
    if r > n {
        return Some(0);
    }
    (n - r + 1..=n).try_fold(1u128, |acc, k| acc.checked_mul(k as u128))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcubench_test::permutations::{expected_count, has_unique_elements};
    use std::collections::HashSet;

    #[test]
    fn test_full_length_lexicographic_order() {
        let perms: Vec<Vec<char>> = Permutations::new(['a', 'b', 'c']).collect();
        assert_eq!(
            perms,
            vec![
                vec!['a', 'b', 'c'],
                vec!['a', 'c', 'b'],
                vec!['b', 'a', 'c'],
                vec!['b', 'c', 'a'],
                vec!['c', 'a', 'b'],
                vec!['c', 'b', 'a'],
            ]
        );
    }

    #[test]
    fn test_counts_match_falling_factorial() {
        for n in 0..=6 {
            for r in 0..=n {
                let count = Permutations::with_len(0..n, r).count();
                assert_eq!(count as u128, expected_count(n as u64, r as u64), "n={n} r={r}");
                assert_eq!(permutation_count(n, r), Some(count as u128));
            }
        }
    }

    #[test]
    fn test_no_repeats_and_no_duplicates_within_tuple() {
        let pool = vec![10, 20, 30, 40, 50];
        let mut seen = HashSet::new();
        for perm in Permutations::with_len(pool.clone(), 3) {
            assert_eq!(perm.len(), 3);
            assert!(has_unique_elements(&perm));
            assert!(perm.iter().all(|x| pool.contains(x)));
            assert!(seen.insert(perm), "tuple emitted twice");
        }
        assert_eq!(seen.len(), 60);
    }

    #[test]
    fn test_output_is_sorted_for_sorted_pool() {
        let perms: Vec<Vec<u8>> = Permutations::with_len(0..5u8, 4).collect();
        let mut sorted = perms.clone();
        sorted.sort();
        assert_eq!(perms, sorted);
    }

    #[test]
    fn test_zero_length_yields_single_empty_tuple() {
        let perms: Vec<Vec<i32>> = Permutations::with_len(vec![1, 2, 3], 0).collect();
        assert_eq!(perms, vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_empty_pool_yields_single_empty_tuple() {
        let perms: Vec<Vec<i32>> = Permutations::new(Vec::new()).collect();
        assert_eq!(perms, vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_length_beyond_pool_yields_nothing() {
        let mut perms = Permutations::with_len(vec![1, 2], 3);
        assert_eq!(perms.next(), None);
        assert_eq!(permutation_count(2, 3), Some(0));
    }

    #[test]
    fn test_exhausted_generator_stays_exhausted() {
        let mut perms = Permutations::new(vec![1, 2]);
        assert_eq!(perms.next(), Some(vec![1, 2]));
        assert_eq!(perms.next(), Some(vec![2, 1]));
        assert_eq!(perms.next(), None);
        assert_eq!(perms.next(), None);
    }

    #[test]
    fn test_permutation_count_overflow() {
        assert_eq!(permutation_count(20, 20), Some(2_432_902_008_176_640_000));
        assert_eq!(permutation_count(100, 100), None);
    }
}
