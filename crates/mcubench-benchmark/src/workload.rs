//! Workloads driven by the timing harness.
//!
//! A workload holds its parameters and the result of its latest run. The
//! harness calls [`Workload::run`] inside the timed region and reads
//! [`Workload::result`] outside it.

use std::fmt;

use mcubench_config::HarnessConfig;
use mcubench_core::{count_solutions, run_points, BenchParams, ParamTable, Point};
use num_traits::Float;

/// Output of a workload's latest run.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadResult {
    /// Amount of work done per run, used to compare timings across scales.
    pub norm: f64,
    /// Human-readable result of the last kernel call.
    pub output: String,
}

/// A kernel wrapped for repeated timing.
pub trait Workload {
    /// Label used in reports.
    fn name(&self) -> &str;

    /// Parameters the workload was built with.
    fn params(&self) -> BenchParams;

    /// Runs the kernel `repeat_count` times, keeping the last result.
    fn run(&mut self);

    /// Returns the latest result.
    fn result(&self) -> WorkloadResult;
}

/// The workloads of the standard suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    Float,
    NQueens,
}

impl WorkloadKind {
    /// Suite order.
    pub const ALL: [WorkloadKind; 2] = [WorkloadKind::Float, WorkloadKind::NQueens];

    pub fn label(&self) -> &'static str {
        match self {
            WorkloadKind::Float => "float",
            WorkloadKind::NQueens => "nqueens",
        }
    }

    /// Returns this workload's parameter table from the harness config.
    pub fn param_table<'a>(&self, config: &'a HarnessConfig) -> &'a ParamTable {
        match self {
            WorkloadKind::Float => &config.float_params,
            WorkloadKind::NQueens => &config.nqueens_params,
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalizes `workload_size` points and folds them to their maximum.
///
/// # Example
///
/// ```
/// use mcubench_benchmark::{FloatWorkload, Workload};
/// use mcubench_core::BenchParams;
///
/// let mut workload: FloatWorkload = FloatWorkload::new(BenchParams::new(2, 50));
/// workload.run();
/// let result = workload.result();
/// assert_eq!(result.norm, 100.0);
/// assert!(result.output.starts_with("Point("));
/// ```
#[derive(Debug, Clone)]
pub struct FloatWorkload<F = f64> {
    params: BenchParams,
    state: Option<Point<F>>,
}

impl<F: Float> FloatWorkload<F> {
    pub fn new(params: BenchParams) -> Self {
        Self {
            params,
            state: None,
        }
    }

    /// Accumulated point of the latest kernel call.
    pub fn state(&self) -> Option<&Point<F>> {
        self.state.as_ref()
    }
}

impl<F: Float + fmt::Display> Workload for FloatWorkload<F> {
    fn name(&self) -> &str {
        WorkloadKind::Float.label()
    }

    fn params(&self) -> BenchParams {
        self.params
    }

    fn run(&mut self) {
        for _ in 0..self.params.repeat_count {
            self.state = run_points(self.params.workload_size as usize);
        }
    }

    fn result(&self) -> WorkloadResult {
        let output = match &self.state {
            Some(point) => point.to_string(),
            None => "None".to_string(),
        };
        WorkloadResult {
            norm: f64::from(self.params.repeat_count) * f64::from(self.params.workload_size),
            output,
        }
    }
}

/// Counts every solution of the `workload_size`-queens problem.
#[derive(Debug, Clone)]
pub struct NQueensWorkload {
    params: BenchParams,
    solutions: Option<usize>,
}

impl NQueensWorkload {
    pub fn new(params: BenchParams) -> Self {
        Self {
            params,
            solutions: None,
        }
    }

    /// Solution count of the latest kernel call.
    pub fn solutions(&self) -> Option<usize> {
        self.solutions
    }
}

impl Workload for NQueensWorkload {
    fn name(&self) -> &str {
        WorkloadKind::NQueens.label()
    }

    fn params(&self) -> BenchParams {
        self.params
    }

    fn run(&mut self) {
        for _ in 0..self.params.repeat_count {
            self.solutions = Some(count_solutions(self.params.workload_size as usize));
        }
    }

    fn result(&self) -> WorkloadResult {
        let exponent = i32::try_from(self.params.workload_size).unwrap_or(i32::MAX) - 3;
        let output = match self.solutions {
            Some(count) => count.to_string(),
            None => "None".to_string(),
        };
        WorkloadResult {
            norm: f64::from(self.params.repeat_count) * 10f64.powi(exponent),
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_workload_keeps_latest_point() {
        let mut workload: FloatWorkload = FloatWorkload::new(BenchParams::new(3, 50));
        assert!(workload.state().is_none());
        assert_eq!(workload.result().output, "None");

        workload.run();
        let expected: Point = run_points(50).unwrap();
        assert_eq!(workload.state(), Some(&expected));
        assert_eq!(workload.result().output, expected.to_string());
        assert_eq!(workload.result().norm, 150.0);
    }

    #[test]
    fn test_float_workload_f32() {
        let mut workload: FloatWorkload<f32> = FloatWorkload::new(BenchParams::new(1, 10));
        workload.run();
        assert!(workload.state().is_some());
        assert_eq!(workload.name(), "float");
    }

    #[test]
    fn test_nqueens_workload() {
        let mut workload = NQueensWorkload::new(BenchParams::new(1, 5));
        workload.run();
        assert_eq!(workload.solutions(), Some(10));

        let result = workload.result();
        assert_eq!(result.output, "10");
        assert_eq!(result.norm, 100.0);
        assert_eq!(workload.name(), "nqueens");
    }

    #[test]
    fn test_nqueens_norm_below_three() {
        let workload = NQueensWorkload::new(BenchParams::new(2, 2));
        assert!((workload.result().norm - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_kind_tables() {
        let config = HarnessConfig::default();
        assert_eq!(
            WorkloadKind::Float.param_table(&config),
            &ParamTable::float_defaults()
        );
        assert_eq!(
            WorkloadKind::NQueens.param_table(&config),
            &ParamTable::nqueens_defaults()
        );
        assert_eq!(WorkloadKind::ALL[0].to_string(), "float");
    }
}
