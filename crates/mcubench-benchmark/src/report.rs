//! Report lines for benchmark results.

use std::fmt::{self, Display};
use std::io::{self, Write};

use mcubench_config::HardwareInfo;

use crate::suite::{SuiteEntry, WorkloadOutcome};

/// Printed in place of timings when no parameter entry fits the scale.
pub const NO_MATCHING_PARAMS: &str = "-1, -1, no matching params";

/// Formats one report line:
/// `<board>, <processor>, <speed>, <version>, average <workload>, <mean>`.
///
/// The mean is printed with one decimal place.
///
/// # Example
///
/// ```
/// use mcubench_benchmark::format_report_line;
/// use mcubench_config::HardwareInfo;
///
/// let hardware = HardwareInfo::new("Pico", "RP2040", "125", "7.0.0");
/// assert_eq!(
///     format_report_line(&hardware, "float", 1234.5),
///     "Pico, RP2040, 125, 7.0.0, average float, 1234.5"
/// );
/// ```
pub fn format_report_line(hardware: &HardwareInfo, workload: &str, mean_us: f64) -> String {
    format!(
        "{}, {}, {}, {}, average {}, {:.1}",
        hardware.board, hardware.processor, hardware.speed, hardware.version, workload, mean_us
    )
}

/// Report of a whole suite: one line per workload.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub hardware: HardwareInfo,
    pub entries: Vec<SuiteEntry>,
}

impl SuiteReport {
    pub fn new(hardware: HardwareInfo, entries: Vec<SuiteEntry>) -> Self {
        Self { hardware, entries }
    }

    /// Returns the report line of one entry.
    pub fn line(&self, entry: &SuiteEntry) -> String {
        match &entry.outcome {
            WorkloadOutcome::Completed(result) => {
                format_report_line(&self.hardware, entry.kind.label(), result.average_micros())
            }
            WorkloadOutcome::NoMatchingParams { .. } => NO_MATCHING_PARAMS.to_string(),
        }
    }

    /// Returns every report line in suite order.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| self.line(e)).collect()
    }

    /// Writes the report lines to a writer.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}

impl Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
