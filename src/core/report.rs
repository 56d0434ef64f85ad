// src/core/report.rs

use crate::{
    constants::{DEFAULT_PRECISION, MAX_PRECISION, REPORT_PREFIX},
    models::{InvocationRecord, ReportFormat, TimerConfig},
    system::sink::{self, ReportSink, StdoutSink},
};
use std::fmt;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Formats invocation records and hands them to a sink.
///
/// A `Reporter` holds no per-call state, so a single instance (or any of its clones)
/// can serve any number of concurrent or nested invocations.
#[derive(Clone)]
pub struct Reporter {
    sink: Arc<dyn ReportSink>,
    format: ReportFormat,
    precision: usize,
    enabled: bool,
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("format", &self.format)
            .field("precision", &self.precision)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl Default for Reporter {
    /// Stdout, text format, four fractional digits.
    fn default() -> Self {
        Self::with_sink(StdoutSink)
    }
}

impl Reporter {
    /// Creates a text reporter with default precision writing to `sink`.
    pub fn with_sink(sink: impl ReportSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
            format: ReportFormat::Text,
            precision: DEFAULT_PRECISION,
            enabled: true,
        }
    }

    /// Builds a reporter from a loaded configuration.
    pub fn from_config(config: &TimerConfig) -> Self {
        Self {
            sink: sink::sink_for(config.sink),
            format: config.format,
            precision: config.precision.min(MAX_PRECISION),
            enabled: config.enabled,
        }
    }

    /// Sets the line format.
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the fractional digits, capped at nanoseconds.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    /// Turns reporting on or off.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether reports are emitted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Renders a record as a single line, without a trailing newline.
    pub fn render(&self, record: &InvocationRecord<'_>) -> String {
        match self.format {
            ReportFormat::Text => format!(
                "{} Function '{}' took {:.*} seconds.",
                REPORT_PREFIX,
                record.callee_name,
                self.precision,
                record.elapsed_secs()
            ),
            ReportFormat::Json => serde_json::json!({
                "ts": unix_millis(),
                "name": record.callee_name,
                "seconds": round_to(record.elapsed_secs(), self.precision),
            })
            .to_string(),
        }
    }

    /// Emits the report for one completed invocation.
    ///
    /// A failing sink is logged and otherwise ignored: the caller of the wrapped
    /// callable must see exactly what the callable returned.
    pub fn report(&self, record: &InvocationRecord<'_>) {
        if !self.enabled {
            return;
        }
        let line = self.render(record);
        if let Err(e) = self.sink.emit(&line) {
            log::warn!(
                "Failed to emit timing report for '{}': {}",
                record.callee_name,
                e
            );
        }
    }

    /// Runs `f`, then reports how long it took under `name`.
    ///
    /// If `f` panics the panic passes through untouched and nothing is reported.
    pub fn measure<R>(&self, name: &str, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let result = f();
        let end = Instant::now();

        self.report(&InvocationRecord::new(name, start, end));
        result
    }

    /// Like [`Reporter::measure`], but only reports when `f` returns `Ok`.
    ///
    /// An `Err` is handed back exactly as `f` produced it.
    pub fn measure_fallible<T, E>(
        &self,
        name: &str,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let start = Instant::now();
        let value = f()?;
        let end = Instant::now();

        self.report(&InvocationRecord::new(name, start, end));
        Ok(value)
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

fn round_to(value: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SinkKind;
    use crate::system::sink::{MemorySink, SinkError};
    use std::time::Duration;

    fn record_of(name: &str, millis: u64) -> InvocationRecord<'_> {
        let start = Instant::now();
        InvocationRecord::new(name, start, start + Duration::from_millis(millis))
    }

    #[test]
    fn test_text_report_uses_four_digits_by_default() {
        let reporter = Reporter::with_sink(MemorySink::new());
        let line = reporter.render(&record_of("slow_function", 1500));
        assert_eq!(line, "[TIMER] Function 'slow_function' took 1.5000 seconds.");
    }

    #[test]
    fn test_text_report_honours_precision() {
        let reporter = Reporter::with_sink(MemorySink::new()).precision(1);
        let line = reporter.render(&record_of("add_numbers", 512));
        assert_eq!(line, "[TIMER] Function 'add_numbers' took 0.5 seconds.");
    }

    #[test]
    fn test_json_report_is_one_object() {
        let reporter = Reporter::with_sink(MemorySink::new()).format(ReportFormat::Json);
        let line = reporter.render(&record_of("add_numbers", 500));

        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["name"], "add_numbers");
        assert_eq!(value["seconds"].as_f64(), Some(0.5));
        assert!(value["ts"].as_u64().is_some());
    }

    #[test]
    fn test_disabled_reporter_emits_nothing() {
        let sink = MemorySink::new();
        let reporter = Reporter::with_sink(sink.clone()).enabled(false);
        reporter.report(&record_of("quiet", 1));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_from_config_carries_settings() {
        let config = TimerConfig {
            enabled: false,
            precision: 2,
            format: ReportFormat::Json,
            sink: SinkKind::Log,
        };
        let reporter = Reporter::from_config(&config);
        assert!(!reporter.is_enabled());
        assert_eq!(reporter.format, ReportFormat::Json);
        assert_eq!(reporter.precision, 2);
    }

    #[test]
    fn test_measure_fallible_skips_report_on_err() {
        let sink = MemorySink::new();
        let reporter = Reporter::with_sink(sink.clone());

        let result: Result<(), &str> = reporter.measure_fallible("fails", || Err("boom"));

        assert_eq!(result, Err("boom"));
        assert!(sink.is_empty());
    }

    struct BrokenSink;

    impl ReportSink for BrokenSink {
        fn emit(&self, _line: &str) -> Result<(), SinkError> {
            Err(SinkError::Poisoned)
        }
    }

    #[test]
    fn test_sink_failure_does_not_alter_result() {
        let reporter = Reporter::with_sink(BrokenSink);
        let value = reporter.measure("broken", || 42);
        assert_eq!(value, 42);
    }
}
