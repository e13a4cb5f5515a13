//! Configuration system for mcubench.
//!
//! Load harness configuration from TOML or YAML to describe the hardware
//! under test, the requested scale and the parameter tables without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use mcubench_config::HarnessConfig;
//! use mcubench_core::Scale;
//!
//! let config = HarnessConfig::from_toml_str(r#"
//!     run_count = 5
//!
//!     [hardware]
//!     board = "Raspberry Pi Pico"
//!     processor = "RP2040"
//!     speed = "125"
//!     version = "7.0.0"
//!
//!     [scale]
//!     n = 1000
//!     m = 1000
//! "#).unwrap();
//!
//! assert_eq!(config.run_count, 5);
//! assert_eq!(config.scale, Scale::new(1000, 1000));
//! assert_eq!(config.float_params.entries().len(), 4);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use mcubench_config::HarnessConfig;
//!
//! let config = HarnessConfig::load("mcubench.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use mcubench_core::{ParamTable, Scale};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Number of timed runs per workload.
pub const DEFAULT_RUN_COUNT: usize = 10;

/// Environment variable naming a configuration file for the binary.
pub const CONFIG_ENV: &str = "MCUBENCH_CONFIG";

/// Main harness configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HarnessConfig {
    /// Timed runs per workload.
    #[serde(default = "default_run_count")]
    pub run_count: usize,

    /// Untimed runs before measurement.
    #[serde(default)]
    pub warmup_count: usize,

    /// Hardware identification printed on every report line.
    #[serde(default)]
    pub hardware: HardwareInfo,

    /// Requested scale factors used to pick workload parameters.
    #[serde(default = "default_scale")]
    pub scale: Scale,

    /// Parameter table for the float workload.
    #[serde(default = "ParamTable::float_defaults")]
    pub float_params: ParamTable,

    /// Parameter table for the N-Queens workload.
    #[serde(default = "ParamTable::nqueens_defaults")]
    pub nqueens_params: ParamTable,
}

fn default_scale() -> Scale {
    Scale::new(100, 100)
}

fn default_run_count() -> usize {
    DEFAULT_RUN_COUNT
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            run_count: DEFAULT_RUN_COUNT,
            warmup_count: 0,
            hardware: HardwareInfo::default(),
            scale: default_scale(),
            float_params: ParamTable::float_defaults(),
            nqueens_params: ParamTable::nqueens_defaults(),
        }
    }
}

impl HarnessConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format from the
    /// extension (`.yaml`/`.yml` for YAML, anything else as TOML).
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads the file named by `MCUBENCH_CONFIG`, or the defaults when the
    /// variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_optional_path(std::env::var_os(CONFIG_ENV))
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn from_optional_path(path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the hardware description.
    pub fn with_hardware(mut self, hardware: HardwareInfo) -> Self {
        self.hardware = hardware;
        self
    }

    /// Sets the requested scale.
    pub fn with_scale(mut self, n: u32, m: u32) -> Self {
        self.scale = Scale::new(n, m);
        self
    }

    /// Sets the number of timed runs per workload.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Sets the number of untimed warmup runs per workload.
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Replaces the float parameter table.
    pub fn with_float_params(mut self, table: ParamTable) -> Self {
        self.float_params = table;
        self
    }

    /// Replaces the N-Queens parameter table.
    pub fn with_nqueens_params(mut self, table: ParamTable) -> Self {
        self.nqueens_params = table;
        self
    }

    /// Checks the configuration can drive a benchmark run.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcubench_config::HarnessConfig;
    ///
    /// assert!(HarnessConfig::default().validate().is_ok());
    /// assert!(HarnessConfig::default().with_run_count(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run_count == 0 {
            return Err(ConfigError::Invalid(
                "run_count must be at least 1".to_string(),
            ));
        }
        self.hardware.validate()?;
        self.float_params
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("float_params: {}", e)))?;
        self.nqueens_params
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("nqueens_params: {}", e)))?;
        Ok(())
    }
}

/// Hardware identification fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HardwareInfo {
    /// Board name.
    pub board: String,

    /// Processor name.
    pub processor: String,

    /// Clock speed label, in MHz.
    pub speed: String,

    /// Runtime or firmware version.
    pub version: String,
}

impl Default for HardwareInfo {
    fn default() -> Self {
        Self {
            board: "Adafruit Circuit Playground Bluefruit".to_string(),
            processor: "nRF52840".to_string(),
            speed: "64".to_string(),
            version: "6.0.0-rc1".to_string(),
        }
    }
}

impl HardwareInfo {
    pub fn new(
        board: impl Into<String>,
        processor: impl Into<String>,
        speed: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            board: board.into(),
            processor: processor.into(),
            speed: speed.into(),
            version: version.into(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("board", &self.board),
            ("processor", &self.processor),
            ("speed", &self.speed),
            ("version", &self.version),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("hardware.{} is empty", name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
