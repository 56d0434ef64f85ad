// src/constants.rs

/// The tag that opens every text report line.
pub const REPORT_PREFIX: &str = "[TIMER]";

/// The number of fractional digits used for elapsed seconds in a report.
pub const DEFAULT_PRECISION: usize = 4;

/// The upper bound accepted for `precision` (nanosecond resolution).
pub const MAX_PRECISION: usize = 9;

/// The `log` target used when reports are routed through the logging facade.
pub const REPORT_LOG_TARGET: &str = "timewrap::report";

/// The name of the directory holding timewrap configuration (inside the system config dir).
pub const CONFIG_DIR_NAME: &str = "timewrap";

/// The name of the reporter configuration file.
pub const CONFIG_FILENAME: &str = "timewrap.toml";

/// Environment variable that points at an alternative configuration file.
pub const CONFIG_ENV_VAR: &str = "TIMEWRAP_CONFIG";
