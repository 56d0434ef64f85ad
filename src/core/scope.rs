// src/core/scope.rs

use crate::{core::report::Reporter, models::InvocationRecord};
use std::borrow::Cow;
use std::time::{Duration, Instant};

/// An RAII timer for a block of code.
///
/// Created at the top of a block, it reports the block's elapsed time when it goes out
/// of scope. A block left by a panic is not reported, and neither is one whose timer
/// was [`cancel`](ScopeTimer::cancel)led.
#[derive(Debug)]
#[must_use = "the block is timed until this value is dropped"]
pub struct ScopeTimer {
    name: Cow<'static, str>,
    start: Instant,
    reporter: Reporter,
    armed: bool,
}

impl ScopeTimer {
    /// Creates a new timer reporting to stdout and starts it immediately.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_reporter(name, Reporter::default())
    }

    /// Creates a timer reporting through `reporter` and starts it.
    pub fn with_reporter(name: impl Into<Cow<'static, str>>, reporter: Reporter) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
            reporter,
            armed: true,
        }
    }

    /// Time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stops the timer without reporting.
    pub fn cancel(mut self) {
        self.armed = false;
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        if !self.armed || std::thread::panicking() {
            return;
        }
        let end = Instant::now();
        self.reporter
            .report(&InvocationRecord::new(&self.name, self.start, end));
    }
}

impl Reporter {
    /// Starts a [`ScopeTimer`] reporting through this reporter.
    pub fn scope(&self, name: impl Into<Cow<'static, str>>) -> ScopeTimer {
        ScopeTimer::with_reporter(name, self.clone())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::core::parse::parse_report_line;
    use crate::system::sink::MemorySink;
    use std::thread;

    #[test]
    fn test_scope_reports_on_drop() {
        let sink = MemorySink::new();
        let reporter = Reporter::with_sink(sink.clone());

        {
            let _timer = reporter.scope("load_block");
            thread::sleep(Duration::from_millis(20));
            assert!(sink.is_empty());
        }

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let report = parse_report_line(&lines[0]).unwrap();
        assert_eq!(report.name, "load_block");
        assert!(report.seconds >= 0.02);
    }

    #[test]
    fn test_cancelled_scope_is_silent() {
        let sink = MemorySink::new();
        let timer = Reporter::with_sink(sink.clone()).scope("early_exit");
        timer.cancel();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_panicking_scope_is_silent() {
        let sink = MemorySink::new();
        let reporter = Reporter::with_sink(sink.clone());

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _timer = reporter.scope("doomed");
            panic!("failed inside block");
        }));

        assert!(outcome.is_err());
        assert!(sink.is_empty());
    }
}
