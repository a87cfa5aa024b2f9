//! Simulation drivers.
//!
//! # Components
//! - [`replay`] - one policy, one sequence, one frame count
//! - [`sweep`] / [`compare`] - fault curves over frame counts `1..=N`
//! - [`ReplayStats`] - per-replay counters
//! - [`ProgressSink`] - where per-capacity progress lines go

mod progress;
mod replay;
mod stats;
mod sweep;

pub use progress::{ProgressEvent, ProgressSink, RecordingSink, TracingSink};
pub use replay::{replay, replay_with_stats, run};
pub use stats::ReplayStats;
#[cfg(feature = "parallel")]
pub use sweep::sweep_parallel;
pub use sweep::{compare, compare_with_sink, sweep, sweep_with_sink, Comparison, FaultCurve};
