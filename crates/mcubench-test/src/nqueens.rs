//! N-Queens reference data.

/// `(board size, number of solutions)` for small boards.
pub const KNOWN_SOLUTION_COUNTS: &[(usize, usize)] = &[
    (1, 1),
    (2, 0),
    (3, 0),
    (4, 2),
    (5, 10),
    (6, 4),
    (7, 40),
    (8, 92),
];

/// Counts attacking pairs on a board given as `columns[row]`.
///
/// Every pair of queens is checked for a shared column or diagonal, so the
/// result is independent of how the board was generated. Zero means no
/// queen attacks another.
pub fn calculate_conflicts(columns: &[usize]) -> usize {
    let mut conflicts = 0;

    for i in 0..columns.len() {
        for j in (i + 1)..columns.len() {
            let (col_i, col_j) = (columns[i] as i64, columns[j] as i64);
            // Column conflict
            if col_i == col_j {
                conflicts += 1;
            }
            // Diagonal conflict: difference in columns equals difference in rows
            if (col_i - col_j).abs() == (j - i) as i64 {
                conflicts += 1;
            }
        }
    }

    conflicts
}
