//! pagesim - a page-replacement simulator comparing FIFO and Aging.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Workload (workload/)  [collaborator]          │   │
//! │  │     uniform / hot-cold generators + trace files          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                    ↓  &[PageId]                                 │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation (sim/)                           │   │
//! │  │   sweep / compare  →  replay (one call per frame count)  │   │
//! │  │          FaultCurve + ReplayStats + ProgressSink         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                    ↓  admit(page) per reference                 │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Eviction Policies (policy/)                 │   │
//! │  │             FIFO  ←─OR─→  Aging (shift counters)         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`policy`] - FIFO and Aging frame sets
//! - [`sim`] - Replay engine and sweep harness
//! - [`workload`] - Reference generation and trace files
//!
//! # Quick Start
//! ```
//! use pagesim::{compare, PolicyKind, WorkloadSpec};
//!
//! let spec = WorkloadSpec::HotCold { references: 1000, pages: 100 };
//! let refs = spec.generate(42).unwrap();
//!
//! let kinds = [PolicyKind::Fifo, PolicyKind::aging(8)];
//! let comparison = compare(&kinds, &refs, 20).unwrap();
//! assert_eq!(comparison.curves().len(), 2);
//! println!("{}", comparison);
//! ```

pub mod common;
pub mod policy;
pub mod sim;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_AGING_BITS;
pub use common::{Error, PageId, PageKey, Result};

pub use policy::{
    Access, AgingConfig, AgingPolicy, CounterInit, FifoPolicy, Policy, PolicyKind,
    ReplacementPolicy,
};
#[cfg(feature = "parallel")]
pub use sim::sweep_parallel;
pub use sim::{
    compare, compare_with_sink, replay, replay_with_stats, sweep, sweep_with_sink, Comparison,
    FaultCurve, ProgressEvent, ProgressSink, RecordingSink, ReplayStats, TracingSink,
};
pub use workload::{read_trace, write_trace, WorkloadSpec};
