//! Colorful console output for harness events.
//!
//! Provides a custom `tracing` layer that formats benchmark lifecycle
//! events with colors on stderr, leaving stdout to the report lines.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (benchmark start/end)
//! - **WARN**: Workloads skipped for lack of parameters
//! - **DEBUG**: Individual timed runs

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "mcubench_benchmark=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = match DEFAULT_DIRECTIVE.parse() {
            Ok(directive) => EnvFilter::builder()
                .with_default_directive(directive)
                .from_env_lossy(),
            Err(_) => EnvFilter::from_default_env(),
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(HarnessConsoleLayer)
            .try_init();
    });
}

// Returns seconds since `init`.
fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let banner = r#"
                       _                     _
 _ __ ___   ___ _   _| |__   ___ _ __   ___| |__
| '_ ` _ \ / __| | | | '_ \ / _ \ '_ \ / __| '_ \
| | | | | | (__| |_| | |_) |  __/ | | | (__| | | |
|_| |_| |_|\___|\__,_|_.__/ \___|_| |_|\___|_| |_|
"#;

    let version_line = format!("          v{} - Microcontroller Benchmark Harness\n", VERSION);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats harness events with colors.
pub struct HarnessConsoleLayer;

impl<S: Subscriber> Layer<S> for HarnessConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("mcubench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    workload: Option<String>,
    output: Option<String>,
    repeat_count: Option<u64>,
    workload_size: Option<u64>,
    run_count: Option<u64>,
    run_index: Option<u64>,
    elapsed_us: Option<u64>,
    min_us: Option<u64>,
    max_us: Option<u64>,
    n: Option<u64>,
    m: Option<u64>,
    norm: Option<f64>,
    average_us: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "workload" => self.workload = Some(s.trim_matches('"').to_string()),
            "output" => self.output = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "repeat_count" => self.repeat_count = Some(value),
            "workload_size" => self.workload_size = Some(value),
            "run_count" => self.run_count = Some(value),
            "run_index" => self.run_index = Some(value),
            "elapsed_us" => self.elapsed_us = Some(value),
            "min_us" => self.min_us = Some(value),
            "max_us" => self.max_us = Some(value),
            "n" => self.n = Some(value),
            "m" => self.m = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "norm" => self.norm = Some(value),
            "average_us" => self.average_us = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "workload" => self.workload = Some(value.to_string()),
            "output" => self.output = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "benchmark_start" => format_benchmark_start(v),
        "benchmark_end" => format_benchmark_end(v),
        "run" => format_run(v, level),
        "no_matching_params" => format_no_matching_params(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    let workload = v.workload.as_deref().unwrap_or("unknown");
    let repeat_count = v.repeat_count.unwrap_or(0);
    let workload_size = v.workload_size.unwrap_or(0);
    let run_count = v.run_count.unwrap_or(0);

    format!(
        "{} {} {} │ {} x size {} │ {} runs",
        format_elapsed(),
        "▶".bright_green().bold(),
        workload.white().bold(),
        repeat_count.to_formatted_string(&Locale::en).bright_yellow(),
        workload_size.to_formatted_string(&Locale::en).bright_yellow(),
        run_count.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    let workload = v.workload.as_deref().unwrap_or("unknown");
    let average = v.average_us.unwrap_or(0.0);
    let min = v.min_us.unwrap_or(0);
    let max = v.max_us.unwrap_or(0);

    format!(
        "{} {} {} │ avg {} │ min {} │ max {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        workload.white().bold(),
        format_micros(average).bright_magenta().bold(),
        format_micros(min as f64).yellow(),
        format_micros(max as f64).yellow(),
    )
}

fn format_run(v: &EventVisitor, level: Level) -> String {
    if level < Level::DEBUG {
        return String::new();
    }

    let run_index = v.run_index.unwrap_or(0);
    let elapsed = v.elapsed_us.unwrap_or(0);
    let output = v.output.as_deref().unwrap_or("N/A");

    let mut line = format!(
        "{} {} Run {:>4} │ {:>12} │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        run_index.to_formatted_string(&Locale::en).bright_black(),
        format_micros(elapsed as f64),
        output.bright_black()
    );

    if let Some(norm) = v.norm {
        line.push_str(&format!(" │ norm {}", norm));
    }

    line
}

fn format_no_matching_params(v: &EventVisitor) -> String {
    let workload = v.workload.as_deref().unwrap_or("unknown");

    format!(
        "{} {} {} │ no matching params for scale ({}, {})",
        format_elapsed(),
        "✗".bright_red().bold(),
        workload.white().bold(),
        v.n.unwrap_or(0).to_formatted_string(&Locale::en).bright_red(),
        v.m.unwrap_or(0).to_formatted_string(&Locale::en).bright_red(),
    )
}

fn format_micros(us: f64) -> String {
    if us < 1000.0 {
        format!("{:.1}µs", us)
    } else if us < 1_000_000.0 {
        format!("{:.2}ms", us / 1000.0)
    } else {
        format!("{:.2}s", us / 1_000_000.0)
    }
}
