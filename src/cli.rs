// src/cli.rs

use crate::models::{ReportFormat, SinkKind, TimerConfig};
use clap::Parser;
use std::path::PathBuf;

/// timewrap: time any callable and report how long it took.
///
/// Runs the two example callables, `slow_function` (sleeps 1.5 s) and
/// `add_numbers(5, 7)` (sleeps 0.5 s), each wrapped for timing, then prints the sum.
///
/// Reporter settings come from `timewrap.toml` (see `--config` and the
/// `TIMEWRAP_CONFIG` environment variable); the flags below override them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a reporter config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report line format.
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Where report lines are written.
    #[arg(long, value_enum)]
    pub sink: Option<SinkKind>,

    /// Fractional digits of elapsed seconds.
    #[arg(long)]
    pub precision: Option<usize>,

    /// Multiplier applied to the example delays.
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Run the async variants on a tokio runtime.
    #[arg(long = "async")]
    pub run_async: bool,
}

impl Cli {
    /// Applies command-line overrides on top of a loaded configuration.
    /// Applies command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, mut config: TimerConfig) -> TimerConfig {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(sink) = self.sink {
            config.sink = sink;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        config
    }
}
