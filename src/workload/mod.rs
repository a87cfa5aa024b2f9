//! Reference sequences: generation and persistence.
//!
//! Nothing in [`crate::policy`] or [`crate::sim`] depends on this module.
//! A sequence read back from a trace file replays exactly like the
//! freshly generated one.

mod generator;
mod trace_file;

pub use generator::{hot_cold_references, hot_cold_weights, uniform_references, WorkloadSpec};
pub use trace_file::{fingerprint, parse_trace, read_trace, write_trace};
