//! Benchmark runner.

use std::time::Instant;

use tracing::{debug, info};

use crate::config::BenchmarkConfig;
use crate::result::{BenchmarkResult, BenchmarkRun};
use crate::workload::Workload;

/// Timing harness around one workload.
///
/// Each measurement run is a single `Workload::run` call timed with the
/// monotonic clock. The workload is stored as a concrete type parameter.
///
/// # Example
///
/// ```
/// use mcubench_benchmark::{Benchmark, BenchmarkConfig, NQueensWorkload};
/// use mcubench_core::BenchParams;
///
/// let config = BenchmarkConfig::new("nqueens").with_run_count(3);
/// let mut benchmark = Benchmark::new(config, NQueensWorkload::new(BenchParams::new(1, 4)));
/// let result = benchmark.run();
///
/// assert_eq!(result.run_count(), 3);
/// assert_eq!(result.last_result().unwrap().output, "2");
/// ```
pub struct Benchmark<W: Workload> {
    config: BenchmarkConfig,
    workload: W,
}

impl<W: Workload> Benchmark<W> {
    /// Creates a new benchmark.
    pub fn new(config: BenchmarkConfig, workload: W) -> Self {
        Self { config, workload }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Returns the workload.
    pub fn workload(&self) -> &W {
        &self.workload
    }

    /// Consumes the benchmark, returning the workload.
    pub fn into_workload(self) -> W {
        self.workload
    }

    /// Runs the benchmark and returns aggregated results.
    ///
    /// Executes warmup runs first (not measured), then measurement runs.
    pub fn run(&mut self) -> BenchmarkResult {
        let params = self.workload.params();
        info!(
            event = "benchmark_start",
            workload = self.config.name(),
            repeat_count = params.repeat_count,
            workload_size = params.workload_size,
            run_count = self.config.run_count() as u64,
        );

        for _ in 0..self.config.warmup_count() {
            self.workload.run();
        }

        let mut result = BenchmarkResult::new(self.config.name(), params);

        for run_index in 0..self.config.run_count() {
            let start = Instant::now();
            self.workload.run();
            let elapsed = start.elapsed();

            let run = BenchmarkRun {
                run_index,
                elapsed,
                result: self.workload.result(),
            };
            debug!(
                event = "run",
                workload = self.config.name(),
                run_index = run_index as u64,
                elapsed_us = run.elapsed_micros(),
                norm = run.result.norm,
                output = %run.result.output,
            );
            result.add_run(run);
        }

        info!(
            event = "benchmark_end",
            workload = self.config.name(),
            average_us = result.average_micros(),
            min_us = result.min_elapsed().as_micros() as u64,
            max_us = result.max_elapsed().as_micros() as u64,
        );

        result
    }
}
