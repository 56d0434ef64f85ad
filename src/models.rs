// src/models.rs

use crate::constants::DEFAULT_PRECISION;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::{Duration, Instant};

// --- INVOCATION MODELS ---
// These only ever live on the stack of a single call.

/// The timing data of one successful invocation of a wrapped callable.
///
/// A record is built after the callable returns, handed to a reporter and then dropped.
/// It is never stored or shared between calls.
#[derive(Debug, Clone, Copy)]
pub struct InvocationRecord<'a> {
    /// Name of the wrapped callable.
    pub callee_name: &'a str,
    /// Taken immediately before the call.
    pub start: Instant,
    /// Taken immediately after the call returned.
    pub end: Instant,
}

impl<'a> InvocationRecord<'a> {
    /// Creates a record from a completed call's timestamps.
    pub fn new(callee_name: &'a str, start: Instant, end: Instant) -> Self {
        Self {
            callee_name,
            start,
            end,
        }
    }

    /// `end - start`, clamped at zero if the clock misbehaves.
    pub fn elapsed(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }

    /// Elapsed time as floating-point seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

/// Identity metadata of a wrapped callable.
///
/// Rust functions carry no runtime name, so the name is supplied at wrap time
/// (the `time_it!` macro fills it in with `stringify!`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableInfo {
    /// The name used in reports.
    pub name: Cow<'static, str>,
    /// Optional documentation of the callable.
    pub doc: Option<Cow<'static, str>>,
}

impl CallableInfo {
    /// Creates metadata carrying only a name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    /// Attaches documentation.
    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

// --- CONFIGURATION MODELS (FOR TOML) ---

/// How a report line is rendered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `[TIMER] Function '<name>' took <elapsed> seconds.`
    #[default]
    Text,
    /// One JSON object per line, for machine parsing.
    Json,
}

/// Where report lines are written.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
    /// Routed through the `log` facade at info level.
    Log,
}

/// Reporter settings as read from `timewrap.toml`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TimerConfig {
    /// When false, nothing is reported.
    pub enabled: bool,
    /// Fractional digits of elapsed seconds.
    pub precision: usize,
    /// Line format.
    pub format: ReportFormat,
    /// Line destination.
    pub sink: SinkKind,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            precision: DEFAULT_PRECISION,
            format: ReportFormat::default(),
            sink: SinkKind::default(),
        }
    }
}
