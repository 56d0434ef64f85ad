//! # timewrap
//!
//! Wraps any callable so that each successful call reports its wall-clock execution time:
//!
//! ```text
//! [TIMER] Function 'add_numbers' took 0.5003 seconds.
//! ```
//!
//! Use [`wrap`] (or [`Reporter::wrap`] to choose where reports go) for closures and
//! function values, and [`time_it!`] for functions defined in place.

mod macros;

/// Command-line arguments of the demo binary.
pub mod cli;
/// Fixed names and defaults.
pub mod constants;
pub mod core;
pub mod demo;
/// Invocation records, callable metadata and configuration models.
pub mod models;
pub mod system;

pub use crate::core::{
    parse::{ParsedReport, parse_report_line},
    report::Reporter,
    scope::ScopeTimer,
    timed::{Invoke, Timed, wrap},
};
