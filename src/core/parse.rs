// src/core/parse.rs

use crate::constants::REPORT_PREFIX;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `[TIMER] Function '<name>' took <seconds> seconds.`
    static ref REPORT_LINE_RE: Regex = Regex::new(&format!(
        r"^{} Function '(.+)' took (\d+(?:\.\d+)?) seconds\.$",
        regex::escape(REPORT_PREFIX)
    ))
    .expect("report line pattern is valid");
}

/// The content of a text report line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    /// Name of the reported callable.
    pub name: String,
    /// Elapsed seconds as printed.
    pub seconds: f64,
}

/// Parses a text-format report line. Returns `None` for anything else, including
/// JSON reports and ordinary program output.
pub fn parse_report_line(line: &str) -> Option<ParsedReport> {
    let caps = REPORT_LINE_RE.captures(line.trim_end())?;
    let name = caps.get(1)?.as_str().to_string();
    let seconds = caps.get(2)?.as_str().parse().ok()?;
    Some(ParsedReport { name, seconds })
}
