//! Benchmark configuration.

/// Number of timed runs when nothing else is configured.
pub const DEFAULT_RUN_COUNT: usize = 10;

/// Configuration for one workload's benchmark.
///
/// Controls warmup iterations and measurement runs.
///
/// # Example
///
/// ```
/// use mcubench_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("float")
///     .with_warmup_count(3)
///     .with_run_count(5);
///
/// assert_eq!(config.name(), "float");
/// assert_eq!(config.warmup_count(), 3);
/// assert_eq!(config.run_count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    warmup_count: usize,
    run_count: usize,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - warmup_count: 0
    /// - run_count: 10
    ///
    /// # Example
    ///
    /// ```
    /// use mcubench_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("nqueens");
    /// assert_eq!(config.warmup_count(), 0);
    /// assert_eq!(config.run_count(), 10);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warmup_count: 0,
            run_count: DEFAULT_RUN_COUNT,
        }
    }

    /// Sets the number of warmup iterations (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of measurement runs.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of warmup iterations.
    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    /// Returns the number of measurement runs.
    pub fn run_count(&self) -> usize {
        self.run_count
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}
