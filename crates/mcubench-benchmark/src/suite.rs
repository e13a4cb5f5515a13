//! The standard suite: the float workload, then the N-Queens workload.

use mcubench_config::HarnessConfig;
use mcubench_core::{BenchError, Result, Scale};
use tracing::warn;

use crate::config::BenchmarkConfig;
use crate::report::SuiteReport;
use crate::result::BenchmarkResult;
use crate::runner::Benchmark;
use crate::workload::{FloatWorkload, NQueensWorkload, WorkloadKind};

/// What happened to one workload of the suite.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkloadOutcome {
    /// Parameters were found and the workload was timed.
    Completed(BenchmarkResult),
    /// No table entry fits the requested scale; nothing was run.
    NoMatchingParams { scale: Scale },
}

impl WorkloadOutcome {
    /// Returns the timings, if the workload ran.
    pub fn result(&self) -> Option<&BenchmarkResult> {
        match self {
            WorkloadOutcome::Completed(result) => Some(result),
            WorkloadOutcome::NoMatchingParams { .. } => None,
        }
    }
}

/// One workload's entry in a suite report.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteEntry {
    pub kind: WorkloadKind,
    pub outcome: WorkloadOutcome,
}

/// Runs every workload of the suite in order.
///
/// A workload without matching parameters reports the sentinel; the
/// remaining workloads still run.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] if the configuration does not
/// validate.
///
/// # Example
///
/// ```
/// use mcubench_benchmark::run_suite;
/// use mcubench_config::HarnessConfig;
///
/// let config = HarnessConfig::new().with_scale(1, 1);
/// let report = run_suite(&config).unwrap();
/// assert_eq!(report.lines(), vec!["-1, -1, no matching params"; 2]);
/// ```
pub fn run_suite(config: &HarnessConfig) -> Result<SuiteReport> {
    config
        .validate()
        .map_err(|e| BenchError::InvalidConfig(e.to_string()))?;

    let entries = WorkloadKind::ALL
        .iter()
        .map(|&kind| run_workload(config, kind))
        .collect();

    Ok(SuiteReport::new(config.hardware.clone(), entries))
}

/// Selects parameters for `kind` and, if any fit, times the workload.
pub fn run_workload(config: &HarnessConfig, kind: WorkloadKind) -> SuiteEntry {
    let Some(params) = kind.param_table(config).select(config.scale) else {
        warn!(
            event = "no_matching_params",
            workload = kind.label(),
            n = config.scale.n,
            m = config.scale.m,
        );
        return SuiteEntry {
            kind,
            outcome: WorkloadOutcome::NoMatchingParams {
                scale: config.scale,
            },
        };
    };

    let bench_config = BenchmarkConfig::new(kind.label())
        .with_warmup_count(config.warmup_count)
        .with_run_count(config.run_count);

    let result = match kind {
        WorkloadKind::Float => {
            Benchmark::new(bench_config, FloatWorkload::<f64>::new(params)).run()
        }
        WorkloadKind::NQueens => {
            Benchmark::new(bench_config, NQueensWorkload::new(params)).run()
        }
    };

    SuiteEntry {
        kind,
        outcome: WorkloadOutcome::Completed(result),
    }
}
