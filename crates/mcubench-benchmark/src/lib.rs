//! Benchmarking harness for mcubench.
//!
//! This crate times the kernels from `mcubench-core` and turns the timings
//! into report lines.
//!
//! # Overview
//!
//! The harness:
//! - Picks workload parameters from a scale-keyed table
//! - Runs a workload a fixed number of times, timing each run
//! - Averages the timings in microseconds
//! - Prints one line per workload tagged with hardware metadata
//!
//! # Example
//!
//! ```
//! use mcubench_benchmark::{Benchmark, BenchmarkConfig, FloatWorkload};
//! use mcubench_core::BenchParams;
//!
//! let config = BenchmarkConfig::new("float").with_run_count(5);
//! let workload: FloatWorkload = FloatWorkload::new(BenchParams::new(1, 50));
//! let result = Benchmark::new(config, workload).run();
//!
//! assert_eq!(result.run_count(), 5);
//! assert!(result.average_micros() >= 0.0);
//! ```
//!
//! Whole-suite usage with a harness configuration:
//!
//! ```text
//! let report = run_suite(&HarnessConfig::default())?;
//! print!("{}", report);
//! ```

mod config;
mod report;
mod result;
mod runner;
mod suite;
mod workload;

pub use config::{BenchmarkConfig, DEFAULT_RUN_COUNT};
pub use report::{format_report_line, SuiteReport, NO_MATCHING_PARAMS};
pub use result::{BenchmarkResult, BenchmarkRun};
pub use runner::Benchmark;
pub use suite::{run_suite, run_workload, SuiteEntry, WorkloadOutcome};
pub use workload::{FloatWorkload, NQueensWorkload, Workload, WorkloadKind, WorkloadResult};
