//! Progress reporting for sweeps.
//!
//! A sweep reports one [`ProgressEvent`] per (capacity, policy) it
//! evaluates. Sinks must be `Sync`: a parallel sweep calls them from worker
//! threads, one complete event per call.

use std::fmt;

use parking_lot::Mutex;

/// Result of one replay inside a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub policy: &'static str,
    pub frames: usize,
    pub faults: u64,
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frames={} | faults({})={}", self.frames, self.policy, self.faults)
    }
}

/// Receives sweep progress.
pub trait ProgressSink: Sync {
    fn record(&self, event: &ProgressEvent);
}

/// Logs each event at `INFO` through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn record(&self, event: &ProgressEvent) {
        tracing::info!(
            target: "pagesim::sweep",
            frames = event.frames,
            policy = event.policy,
            faults = event.faults,
            "{}",
            event
        );
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, in arrival order.
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProgressSink for RecordingSink {
    fn record(&self, event: &ProgressEvent) {
        self.events.lock().push(event.clone());
    }
}
