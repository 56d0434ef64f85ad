//! # System Interaction Layer
//!
//! This module is the boundary between the timing core and the outside world.
//!
//! ## Modules
//!
//! - **`sink`**: destinations for rendered report lines (stdout, stderr, the `log`
//!   facade, or an in-memory buffer for tests).
//! - **`config_loader`**: locates and parses `timewrap.toml`, which selects the sink,
//!   the line format and the precision.

/// Loading of `timewrap.toml`.
pub mod config_loader;
/// Report destinations.
pub mod sink;
