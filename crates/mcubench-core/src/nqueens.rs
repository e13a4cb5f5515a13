//! N-Queens enumeration by permutation filtering.
//!
//! Every candidate is a permutation of `0..Q`, so rows and columns are
//! unique by construction. A candidate is kept when no two queens share a
//! rising (`col + row`) or falling (`col - row`) diagonal.

use std::fmt;

use crate::permutation::Permutations;

/// A board configuration: `columns()[row]` is the column of the queen on `row`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    columns: Vec<usize>,
}

impl Board {
    /// Wraps a column vector. No validity check is performed.
    pub fn from_columns(columns: Vec<usize>) -> Self {
        Self { columns }
    }

    /// Returns the queen column for each row.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Returns the board size (number of queens).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true for the 0x0 board.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if no two queens attack each other.
    pub fn is_valid(&self) -> bool {
        is_permutation(&self.columns) && is_valid_configuration(&self.columns)
    }

    /// Consumes the board, returning the column vector.
    pub fn into_columns(self) -> Vec<usize> {
        self.columns
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.columns.len();
        for (row, &col) in self.columns.iter().enumerate() {
            for c in 0..n {
                f.write_str(if c == col { "Q" } else { "." })?;
            }
            if row + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Returns true if all `columns[i] + i` are distinct and all
/// `columns[i] - i` are distinct.
///
/// Row and column uniqueness are not checked; callers feed permutations.
///
/// # Example
///
/// ```
/// use mcubench_core::is_valid_configuration;
///
/// assert!(is_valid_configuration(&[1, 3, 0, 2]));
/// assert!(!is_valid_configuration(&[0, 1, 2, 3]));
/// ```
pub fn is_valid_configuration(columns: &[usize]) -> bool {
    let n = columns.len();
    if n == 0 {
        return true;
    }
    // rising diagonals col+row lie in 0..2n-1, falling col-row+n-1 likewise
    let mut rising = vec![false; 2 * n - 1];
    let mut falling = vec![false; 2 * n - 1];
    for (row, &col) in columns.iter().enumerate() {
        let r = col + row;
        let f = col + n - 1 - row;
        if r >= rising.len() || f >= falling.len() || rising[r] || falling[f] {
            return false;
        }
        rising[r] = true;
        falling[f] = true;
    }
    true
}

fn is_permutation(columns: &[usize]) -> bool {
    let mut used = vec![false; columns.len()];
    columns.iter().all(|&c| match used.get_mut(c) {
        Some(slot) if !*slot => {
            *slot = true;
            true
        }
        _ => false,
    })
}

/// Lazy sequence of every valid `Q`-queens board, in permutation order.
///
/// # Example
///
/// ```
/// use mcubench_core::NQueens;
///
/// let boards: Vec<Vec<usize>> = NQueens::new(4).map(|b| b.into_columns()).collect();
/// assert_eq!(boards, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct NQueens {
    queen_count: usize,
    candidates: Permutations<usize>,
}

impl NQueens {
    /// Creates the enumerator for a `queen_count` x `queen_count` board.
    pub fn new(queen_count: usize) -> Self {
        Self {
            queen_count,
            candidates: Permutations::new(0..queen_count),
        }
    }

    /// Returns the number of queens (board size).
    pub fn queen_count(&self) -> usize {
        self.queen_count
    }
}

impl Iterator for NQueens {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        self.candidates
            .by_ref()
            .find(|candidate| is_valid_configuration(candidate))
            .map(Board::from_columns)
    }
}

impl std::iter::FusedIterator for NQueens {}

/// Counts every valid `queen_count`-queens board.
///
/// # Example
///
/// ```
/// use mcubench_core::count_solutions;
///
/// assert_eq!(count_solutions(6), 4);
/// ```
pub fn count_solutions(queen_count: usize) -> usize {
    NQueens::new(queen_count).count()
}
