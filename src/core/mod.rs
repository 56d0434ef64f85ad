//! # Timing Core
//!
//! - **`timed`**: the [`Timed`](timed::Timed) wrapper and the [`Invoke`](timed::Invoke)
//!   trait that lets it call callables of any arity.
//! - **`report`**: the [`Reporter`](report::Reporter), which renders one invocation
//!   record and hands it to a sink.
//! - **`scope`**: RAII timing for a block of code.
//! - **`future`**: timing for futures and async callables.
//! - **`parse`**: reading text report lines back.

/// Timing for futures and async callables.
pub mod future;
/// Parsing of text report lines.
pub mod parse;
/// Rendering and dispatch of invocation records.
pub mod report;
/// RAII timing for blocks.
pub mod scope;
/// The timing wrapper.
pub mod timed;
