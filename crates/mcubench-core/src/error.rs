//! Error types for mcubench

use thiserror::Error;

/// Main error type for mcubench operations
#[derive(Debug, Error)]
pub enum BenchError {
    /// Harness configuration cannot drive a benchmark
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Selected benchmark parameters cannot be executed
    #[error("Invalid benchmark parameters: {0}")]
    InvalidParams(String),
}

/// Result type alias for mcubench operations
pub type Result<T> = std::result::Result<T, BenchError>;
