//! Benchmark parameters and the scale-keyed tables they are picked from.

use std::fmt;

use crate::error::{BenchError, Result};

/// Requested scale factors `(n, m)`.
///
/// Ordering is lexicographic on `(n, m)`, which is how table keys compete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scale {
    pub n: u32,
    pub m: u32,
}

impl Scale {
    pub const fn new(n: u32, m: u32) -> Self {
        Self { n, m }
    }

    /// Returns true if a table entry keyed by `self` may run at `requested`:
    /// `10 * n <= 12 * N` and `m <= M`.
    pub fn fits(&self, requested: Scale) -> bool {
        10 * u64::from(self.n) <= 12 * u64::from(requested.n) && self.m <= requested.m
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.n, self.m)
    }
}

/// Parameters of one workload: how many kernel calls make up a timed run,
/// and the kernel's size argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchParams {
    pub repeat_count: u32,
    pub workload_size: u32,
}

impl BenchParams {
    pub const fn new(repeat_count: u32, workload_size: u32) -> Self {
        Self {
            repeat_count,
            workload_size,
        }
    }

    /// Rejects parameters that would time an empty run.
    pub fn validate(&self) -> Result<()> {
        if self.repeat_count == 0 {
            return Err(BenchError::InvalidParams(
                "repeat_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A table row: parameters usable once the requested scale reaches `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamEntry {
    pub key: Scale,
    pub params: BenchParams,
}

impl ParamEntry {
    pub const fn new(key: Scale, params: BenchParams) -> Self {
        Self { key, params }
    }
}

/// Scale-keyed parameter table.
///
/// # Example
///
/// ```
/// use mcubench_core::{BenchParams, ParamTable, Scale};
///
/// let table = ParamTable::float_defaults();
/// assert_eq!(table.select(Scale::new(100, 100)), Some(BenchParams::new(1, 50)));
/// assert_eq!(table.select(Scale::new(1, 1)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParamTable {
    entries: Vec<ParamEntry>,
}

impl ParamTable {
    pub fn new(entries: Vec<ParamEntry>) -> Self {
        Self { entries }
    }

    /// Default table for the float workload.
    pub fn float_defaults() -> Self {
        Self::from_rows(&[
            ((50, 25), (1, 150)),
            ((100, 100), (1, 50)),
            ((1000, 1000), (10, 1500)),
            ((5000, 1000), (20, 3000)),
        ])
    }

    /// Default table for the N-Queens workload.
    pub fn nqueens_defaults() -> Self {
        Self::from_rows(&[
            ((50, 25), (1, 5)),
            ((100, 25), (1, 5)),
            ((1000, 100), (1, 7)),
            ((5000, 100), (1, 8)),
        ])
    }

    fn from_rows(rows: &[((u32, u32), (u32, u32))]) -> Self {
        let entries = rows
            .iter()
            .map(|&((n, m), (repeat, size))| {
                ParamEntry::new(Scale::new(n, m), BenchParams::new(repeat, size))
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ParamEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a row.
    pub fn with_entry(mut self, key: Scale, params: BenchParams) -> Self {
        self.entries.push(ParamEntry::new(key, params));
        self
    }

    /// Picks the fitting entry with the largest key.
    ///
    /// Keys must compare strictly greater than `(0, 0)`; on equal keys the
    /// earlier row wins. `None` means nothing fits the requested scale.
    pub fn select(&self, requested: Scale) -> Option<BenchParams> {
        self.select_entry(requested).map(|entry| entry.params)
    }

    /// Like [`select`](Self::select) but returns the whole row.
    pub fn select_entry(&self, requested: Scale) -> Option<&ParamEntry> {
        let mut best: Option<&ParamEntry> = None;
        let mut best_key = Scale::default();
        for entry in &self.entries {
            if entry.key.fits(requested) && entry.key > best_key {
                best_key = entry.key;
                best = Some(entry);
            }
        }
        best
    }

    /// Checks every row's parameters.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            entry.params.validate().map_err(|e| {
                BenchError::InvalidParams(format!("entry {}: {}", entry.key, e))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_selection_at_100_100() {
        let table = ParamTable::float_defaults();
        let entry = table.select_entry(Scale::new(100, 100)).unwrap();
        assert_eq!(entry.key, Scale::new(100, 100));
        assert_eq!(entry.params, BenchParams::new(1, 50));
    }

    #[test]
    fn test_nqueens_selection_at_100_100() {
        let table = ParamTable::nqueens_defaults();
        let entry = table.select_entry(Scale::new(100, 100)).unwrap();
        assert_eq!(entry.key, Scale::new(100, 25));
        assert_eq!(entry.params, BenchParams::new(1, 5));
    }

    #[test]
    fn test_no_match_at_1_1() {
        assert_eq!(ParamTable::float_defaults().select(Scale::new(1, 1)), None);
        assert_eq!(ParamTable::nqueens_defaults().select(Scale::new(1, 1)), None);
    }

    #[test]
    fn test_n_allows_twenty_percent_headroom() {
        // 10 * 50 <= 12 * 42 holds, 12 * 41 does not
        let table = ParamTable::float_defaults();
        assert_eq!(table.select(Scale::new(42, 25)), Some(BenchParams::new(1, 150)));
        assert_eq!(table.select(Scale::new(41, 25)), None);
    }

    #[test]
    fn test_m_is_a_hard_limit() {
        let table = ParamTable::float_defaults();
        assert_eq!(table.select(Scale::new(100, 99)), Some(BenchParams::new(1, 150)));
        assert_eq!(table.select(Scale::new(100, 24)), None);
    }

    #[test]
    fn test_largest_scale_selected() {
        let table = ParamTable::float_defaults();
        assert_eq!(
            table.select(Scale::new(10_000, 10_000)),
            Some(BenchParams::new(20, 3000))
        );
        let table = ParamTable::nqueens_defaults();
        assert_eq!(
            table.select(Scale::new(1000, 1000)),
            Some(BenchParams::new(1, 7))
        );
    }

    #[test]
    fn test_selection_ignores_row_order() {
        let table = ParamTable::default()
            .with_entry(Scale::new(100, 100), BenchParams::new(1, 50))
            .with_entry(Scale::new(50, 25), BenchParams::new(1, 150));
        assert_eq!(table.select(Scale::new(100, 100)), Some(BenchParams::new(1, 50)));
    }

    #[test]
    fn test_zero_key_never_selected() {
        let table = ParamTable::default().with_entry(Scale::new(0, 0), BenchParams::new(1, 1));
        assert_eq!(table.select(Scale::new(100, 100)), None);
    }

    #[test]
    fn test_lexicographic_key_comparison() {
        let table = ParamTable::default()
            .with_entry(Scale::new(10, 90), BenchParams::new(1, 1))
            .with_entry(Scale::new(20, 10), BenchParams::new(2, 2));
        assert_eq!(table.select(Scale::new(100, 100)), Some(BenchParams::new(2, 2)));
    }

    #[test]
    fn test_validate_rejects_zero_repeat() {
        let table = ParamTable::default().with_entry(Scale::new(1, 1), BenchParams::new(0, 5));
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("repeat_count"));
        assert!(ParamTable::float_defaults().validate().is_ok());
    }
}
