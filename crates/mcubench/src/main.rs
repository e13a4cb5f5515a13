//! Runs the standard suite and prints one report line per workload.
//!
//! Takes no arguments. Set `MCUBENCH_CONFIG` to a TOML or YAML file to
//! override the built-in hardware description, scale or tables.

use std::io;
use std::process::ExitCode;

use mcubench::{run_suite, HarnessConfig};

fn main() -> ExitCode {
    #[cfg(feature = "console")]
    mcubench::console::init();

    let config = match HarnessConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = match run_suite(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = report.write(io::stdout().lock()) {
        eprintln!("error: failed to write report: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
