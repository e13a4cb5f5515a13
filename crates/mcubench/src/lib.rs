//! mcubench - A microcontroller benchmark harness in Rust
//!
//! Times a floating point kernel and an N-Queens kernel, then reports the
//! average run time tagged with the hardware under test.
//!
//! # Example
//!
//! ```rust
//! use mcubench::prelude::*;
//!
//! let config = HarnessConfig::new().with_run_count(2);
//! let report = run_suite(&config).unwrap();
//! assert_eq!(report.lines().len(), 2);
//! ```

// Kernels
pub use mcubench_core::{
    count_solutions, is_valid_configuration, maximize_all, permutation_count, run_points,
    BenchError, Board, NQueens, Permutations, Point,
};

// Parameter tables
pub use mcubench_core::{BenchParams, ParamEntry, ParamTable, Scale};

// Configuration
pub use mcubench_config::{ConfigError, HardwareInfo, HarnessConfig};

// Timing harness
pub use mcubench_benchmark::{
    format_report_line, run_suite, run_workload, Benchmark, BenchmarkConfig, BenchmarkResult,
    BenchmarkRun, FloatWorkload, NQueensWorkload, SuiteEntry, SuiteReport, Workload,
    WorkloadKind, WorkloadOutcome, WorkloadResult, NO_MATCHING_PARAMS,
};

#[cfg(feature = "console")]
pub use mcubench_console as console;

pub mod prelude {
    pub use super::{HardwareInfo, HarnessConfig};
    pub use super::{run_suite, Benchmark, BenchmarkConfig, Workload};
    pub use super::{BenchParams, ParamTable, Scale};
    pub use super::{NQueens, Permutations, Point};
}
