// src/core/future.rs

use crate::{
    core::{
        report::Reporter,
        timed::{Invoke, Timed},
    },
    models::InvocationRecord,
};
use std::future::Future;
use std::time::Instant;

// Timing for futures. The clock starts on first poll and stops when the future
// resolves, so time spent suspended counts as elapsed. A future dropped before it
// resolves is never reported.

impl Reporter {
    /// Awaits `fut` and reports how long it took under `name`.
    pub async fn time_future<Fut>(&self, name: &str, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        let start = Instant::now();
        let output = fut.await;
        let end = Instant::now();

        self.report(&InvocationRecord::new(name, start, end));
        output
    }

    /// Like [`Reporter::time_future`], but only reports when the future yields `Ok`.
    pub async fn time_future_fallible<Fut, T, E>(&self, name: &str, fut: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        let start = Instant::now();
        let value = fut.await?;
        let end = Instant::now();

        self.report(&InvocationRecord::new(name, start, end));
        Ok(value)
    }
}

impl<F> Timed<F> {
    /// Invokes a callable that returns a future and times it to completion.
    pub async fn call_async<Args, Fut>(&self, args: Args) -> Fut::Output
    where
        F: Invoke<Args, Output = Fut>,
        Fut: Future,
    {
        let start = Instant::now();
        let output = self.inner.invoke(args).await;
        let end = Instant::now();

        self.reporter
            .report(&InvocationRecord::new(self.name(), start, end));
        output
    }

    /// Async counterpart of [`Timed::try_call`].
    pub async fn try_call_async<Args, Fut, T, E>(&self, args: Args) -> Result<T, E>
    where
        F: Invoke<Args, Output = Fut>,
        Fut: Future<Output = Result<T, E>>,
    {
        let start = Instant::now();
        let value = self.inner.invoke(args).await?;
        let end = Instant::now();

        self.reporter
            .report(&InvocationRecord::new(self.name(), start, end));
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse::parse_report_line;
    use crate::system::sink::MemorySink;
    use std::time::Duration;

    async fn add_later(a: i64, b: i64) -> i64 {
        tokio::time::sleep(Duration::from_millis(50)).await;
        a + b
    }

    async fn refuse(code: u8) -> Result<u8, String> {
        Err(format!("refused {}", code))
    }

    #[tokio::test]
    async fn test_call_async_counts_suspended_time() {
        let sink = MemorySink::new();
        let add = Reporter::with_sink(sink.clone()).wrap("add_later", add_later);

        let sum = add.call_async((5, 7)).await;

        assert_eq!(sum, 12);
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let report = parse_report_line(&lines[0]).unwrap();
        assert_eq!(report.name, "add_later");
        assert!(report.seconds >= 0.05);
    }

    #[tokio::test]
    async fn test_try_call_async_err_is_not_reported() {
        let sink = MemorySink::new();
        let refuse = Reporter::with_sink(sink.clone()).wrap("refuse", refuse);

        let result = refuse.try_call_async((3,)).await;

        assert_eq!(result, Err("refused 3".to_string()));
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_future_is_not_reported() {
        let sink = MemorySink::new();
        let reporter = Reporter::with_sink(sink.clone());

        let slow = reporter.time_future("never_finishes", tokio::time::sleep(Duration::from_secs(30)));
        let outcome = tokio::time::timeout(Duration::from_millis(20), slow).await;

        assert!(outcome.is_err());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_time_future_fallible_reports_ok() {
        let sink = MemorySink::new();
        let reporter = Reporter::with_sink(sink.clone());

        let value = reporter
            .time_future_fallible("ready", async { Ok::<_, String>(9) })
            .await;

        assert_eq!(value, Ok(9));
        assert_eq!(sink.lines().len(), 1);
    }
}
