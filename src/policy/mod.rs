//! Eviction policy implementations.
//!
//! Currently implements:
//! - [`FifoPolicy`] - evicts the longest-resident page
//! - [`AgingPolicy`] - evicts the page with the smallest shift-register
//!   recency counter
//!
//! Both share the [`ReplacementPolicy`] contract: admit one reference,
//! update the frame set in place, and report whether it was a hit or a
//! fault. [`PolicyKind`] describes a policy without any frame state and
//! builds a fresh [`Policy`] for each replay.

mod aging;
mod fifo;

pub use aging::{AgingConfig, AgingPolicy, CounterInit};
pub use fifo::FifoPolicy;

use std::fmt;

use crate::common::{PageKey, Result};

/// Outcome of admitting one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,
    /// The page was not resident and has been loaded.
    Fault,
}

impl Access {
    #[inline]
    pub fn is_fault(self) -> bool {
        self == Access::Fault
    }
}

/// A bounded frame set with an eviction rule.
pub trait ReplacementPolicy<P> {
    /// Short lowercase policy name used in logs and tables.
    fn name(&self) -> &'static str;

    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Number of pages currently resident.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Process one reference, evicting a page first if the set is full and
    /// the page is not resident.
    fn admit(&mut self, page: &P) -> Access;
}

/// Which policy to run, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Fifo,
    Aging(AgingConfig),
}

impl PolicyKind {
    /// Aging with the given counter width and default initialization.
    pub fn aging(bits: u32) -> Self {
        PolicyKind::Aging(AgingConfig::new(bits))
    }

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Aging(_) => "aging",
        }
    }

    /// Reject unusable parameters before any frame set is built.
    ///
    /// # Errors
    /// - `Error::InvalidAgingBits` for an Aging width outside `1..=64`
    pub fn validate(&self) -> Result<()> {
        match self {
            PolicyKind::Fifo => Ok(()),
            PolicyKind::Aging(config) => config.validate(),
        }
    }

    /// Build an empty frame set of `capacity` frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    /// - `Error::InvalidAgingBits` for an Aging width outside `1..=64`
    pub fn build<P: PageKey>(&self, capacity: usize) -> Result<Policy<P>> {
        match self {
            PolicyKind::Fifo => FifoPolicy::new(capacity).map(Policy::Fifo),
            PolicyKind::Aging(config) => AgingPolicy::new(capacity, *config).map(Policy::Aging),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Fifo => write!(f, "fifo"),
            PolicyKind::Aging(config) => write!(f, "aging({} bits)", config.bits),
        }
    }
}

/// A frame set for any supported policy.
pub enum Policy<P> {
    Fifo(FifoPolicy<P>),
    Aging(AgingPolicy<P>),
}

impl<P: PageKey> ReplacementPolicy<P> for Policy<P> {
    fn name(&self) -> &'static str {
        match self {
            Policy::Fifo(p) => p.name(),
            Policy::Aging(p) => p.name(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            Policy::Fifo(p) => p.capacity(),
            Policy::Aging(p) => p.capacity(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Policy::Fifo(p) => p.len(),
            Policy::Aging(p) => p.len(),
        }
    }

    #[inline]
    fn admit(&mut self, page: &P) -> Access {
        match self {
            Policy::Fifo(p) => p.admit(page),
            Policy::Aging(p) => p.admit(page),
        }
    }
}
