//! mcubench core - kernels and parameter tables for the benchmark harness
//!
//! This crate provides the pieces every benchmark run is built from:
//! - A lazy permutation generator
//! - An N-Queens enumerator filtering those permutations
//! - The floating point `Point` kernel
//! - Scale-keyed parameter tables

pub mod error;
pub mod nqueens;
pub mod params;
pub mod permutation;
pub mod point;

pub use error::{BenchError, Result};
pub use nqueens::{count_solutions, is_valid_configuration, Board, NQueens};
pub use params::{BenchParams, ParamEntry, ParamTable, Scale};
pub use permutation::{permutation_count, Permutations};
pub use point::{maximize_all, run_points, Point};
