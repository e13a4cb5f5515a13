//! Benchmark result types.

use std::time::Duration;

use mcubench_core::BenchParams;

use crate::workload::WorkloadResult;

/// Result of a single timed run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRun {
    /// Run index (0-based).
    pub run_index: usize,
    /// Wall-clock time of one `Workload::run` call.
    pub elapsed: Duration,
    /// Workload output after the run.
    pub result: WorkloadResult,
}

impl BenchmarkRun {
    /// Elapsed time in whole microseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use mcubench_benchmark::{BenchmarkRun, WorkloadResult};
    /// use std::time::Duration;
    ///
    /// let run = BenchmarkRun {
    ///     run_index: 0,
    ///     elapsed: Duration::from_nanos(12_999),
    ///     result: WorkloadResult { norm: 1.0, output: String::new() },
    /// };
    /// assert_eq!(run.elapsed_micros(), 12);
    /// ```
    pub fn elapsed_micros(&self) -> u64 {
        u64::try_from(self.elapsed.as_micros()).unwrap_or(u64::MAX)
    }
}

/// Aggregated results from the timed runs of one workload.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Workload name.
    pub name: String,
    /// Parameters the workload ran with.
    pub params: BenchParams,
    /// Individual runs.
    pub runs: Vec<BenchmarkRun>,
}

impl BenchmarkResult {
    /// Creates a new benchmark result.
    pub fn new(name: impl Into<String>, params: BenchParams) -> Self {
        Self {
            name: name.into(),
            params,
            runs: Vec::new(),
        }
    }

    /// Adds a run to the results.
    pub fn add_run(&mut self, run: BenchmarkRun) {
        self.runs.push(run);
    }

    /// Returns the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Sum of the per-run whole microseconds.
    pub fn total_micros(&self) -> u64 {
        self.runs
            .iter()
            .map(BenchmarkRun::elapsed_micros)
            .fold(0u64, u64::saturating_add)
    }

    /// Mean of the per-run whole microseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use mcubench_benchmark::{BenchmarkResult, BenchmarkRun, WorkloadResult};
    /// use mcubench_core::BenchParams;
    /// use std::time::Duration;
    ///
    /// let mut result = BenchmarkResult::new("float", BenchParams::new(1, 50));
    /// for (i, us) in [100, 205].into_iter().enumerate() {
    ///     result.add_run(BenchmarkRun {
    ///         run_index: i,
    ///         elapsed: Duration::from_micros(us),
    ///         result: WorkloadResult { norm: 50.0, output: String::new() },
    ///     });
    /// }
    ///
    /// assert_eq!(result.average_micros(), 152.5);
    /// ```
    pub fn average_micros(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.total_micros() as f64 / self.runs.len() as f64
    }

    /// Returns the minimum run time.
    pub fn min_elapsed(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.elapsed)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns the maximum run time.
    pub fn max_elapsed(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.elapsed)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Output of the last run, if any.
    pub fn last_result(&self) -> Option<&WorkloadResult> {
        self.runs.last().map(|r| &r.result)
    }
}
