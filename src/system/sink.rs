// src/system/sink.rs

use crate::constants::REPORT_LOG_TARGET;
use crate::models::SinkKind;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Failure to emit a report line.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The underlying stream rejected the write.
    #[error("Could not write report line to {target}: {source}")]
    Write {
        /// The stream name.
        target: &'static str,
        /// The I/O error.
        #[source]
        source: io::Error,
    },
    /// A thread panicked while holding the in-memory buffer.
    #[error("Report buffer is poisoned.")]
    Poisoned,
}

/// A destination for rendered report lines.
///
/// Implementations must be usable from several threads at once, since a wrapped
/// callable may be invoked concurrently.
pub trait ReportSink: Send + Sync {
    /// Emits one complete line. `line` carries no trailing newline.
    fn emit(&self, line: &str) -> Result<(), SinkError>;
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        // Hold the lock for the whole line so concurrent reports don't interleave.
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)
            .and_then(|_| out.flush())
            .map_err(|source| SinkError::Write {
                target: "stdout",
                source,
            })
    }
}

/// Writes each line to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl ReportSink for StderrSink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        let mut err = io::stderr().lock();
        writeln!(err, "{}", line).map_err(|source| SinkError::Write {
            target: "stderr",
            source,
        })
    }
}

/// Routes each line through the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        log::info!(target: REPORT_LOG_TARGET, "{}", line);
        Ok(())
    }
}

/// Collects lines in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line emitted so far, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Removes and returns every line emitted so far.
    pub fn take(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|mut lines| std::mem::take(&mut *lines))
            .unwrap_or_default()
    }

    /// True when nothing has been emitted (or everything was taken).
    pub fn is_empty(&self) -> bool {
        self.lines.lock().map(|lines| lines.is_empty()).unwrap_or(true)
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        let mut lines = self.lines.lock().map_err(|_| SinkError::Poisoned)?;
        lines.push(line.to_string());
        Ok(())
    }
}

/// Builds the sink named in the configuration.
pub fn sink_for(kind: SinkKind) -> Arc<dyn ReportSink> {
    log::debug!("Building report sink: {:?}", kind);
    match kind {
        SinkKind::Stdout => Arc::new(StdoutSink),
        SinkKind::Stderr => Arc::new(StderrSink),
        SinkKind::Log => Arc::new(LogSink),
    }
}
