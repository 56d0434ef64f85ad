// src/demo.rs

//! Two example callables and the demo run that exercises them.

use crate::core::report::Reporter;
use std::thread;
use std::time::Duration;

/// How long `slow_function` sleeps.
pub const SLOW_FUNCTION_DELAY: Duration = Duration::from_millis(1500);

/// How long `add_numbers` sleeps before adding.
pub const ADD_NUMBERS_DELAY: Duration = Duration::from_millis(500);

crate::time_it! {
    /// Simulate a slow task.
    pub fn slow_function() {
        slow_task(SLOW_FUNCTION_DELAY);
    }

    /// Add two numbers with a simulated delay.
    pub fn add_numbers(a: i64, b: i64) -> i64 {
        delayed_sum(ADD_NUMBERS_DELAY, a, b)
    }
}

/// Sleeps for `delay`, then announces completion.
pub fn slow_task(delay: Duration) {
    thread::sleep(delay);
    println!("Finished slow function.");
}

/// Sleeps for `delay`, then returns `a + b`.
pub fn delayed_sum(delay: Duration, a: i64, b: i64) -> i64 {
    thread::sleep(delay);
    a + b
}

/// Multiplies a delay, treating a non-finite or negative result as zero.
pub fn scaled(delay: Duration, scale: f64) -> Duration {
    Duration::try_from_secs_f64(delay.as_secs_f64() * scale).unwrap_or(Duration::ZERO)
}

/// Runs both example callables through `reporter` and prints the sum.
pub fn run(reporter: &Reporter, scale: f64) -> i64 {
    let slow = reporter
        .wrap("slow_function", move || {
            slow_task(scaled(SLOW_FUNCTION_DELAY, scale));
        })
        .with_doc("Simulate a slow task.");
    slow.call(());

    let add = reporter
        .wrap("add_numbers", move |a: i64, b: i64| {
            delayed_sum(scaled(ADD_NUMBERS_DELAY, scale), a, b)
        })
        .with_doc("Add two numbers with a simulated delay.");
    let result = add.call((5, 7));

    println!("Sum: {}", result);
    result
}

/// Same as [`run`], with the delays awaited on the async runtime instead of blocking.
pub async fn run_async(reporter: &Reporter, scale: f64) -> i64 {
    let slow = reporter.wrap("slow_function", move || async move {
        tokio::time::sleep(scaled(SLOW_FUNCTION_DELAY, scale)).await;
        println!("Finished slow function.");
    });
    slow.call_async(()).await;

    let add = reporter.wrap("add_numbers", move |a: i64, b: i64| async move {
        tokio::time::sleep(scaled(ADD_NUMBERS_DELAY, scale)).await;
        a + b
    });
    let result = add.call_async((5, 7)).await;

    println!("Sum: {}", result);
    result
}
