//! Shared test fixtures for mcubench crates.
//!
//! This crate provides reference data and independent checkers written
//! without any of the harness code. It does NOT depend on `mcubench-core`
//! so the core crate can use it as a dev-dependency.
//!
//! - [`nqueens`] - known solution counts and a pairwise conflict counter
//! - [`permutations`] - expected counts and tuple checks
//! - [`report`] - report line parsing
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! mcubench-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use mcubench_test::nqueens::{calculate_conflicts, KNOWN_SOLUTION_COUNTS};
//! ```

pub mod nqueens;
pub mod permutations;
pub mod report;

pub use nqueens::{calculate_conflicts, KNOWN_SOLUTION_COUNTS};
pub use report::{parse_report_line, ParsedReportLine};
