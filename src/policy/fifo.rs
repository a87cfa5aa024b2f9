//! FIFO (First-In-First-Out) replacement policy.
//!
//! Evicts the page that has been resident longest. Re-referencing a resident
//! page does not move it, so this is a pure insertion-order queue rather
//! than LRU.

use std::collections::{HashSet, VecDeque};

use crate::common::{Error, PageKey, Result};
use crate::policy::{Access, ReplacementPolicy};

/// A FIFO frame set of fixed capacity.
pub struct FifoPolicy<P> {
    /// Resident pages in admission order (front = oldest).
    queue: VecDeque<P>,

    /// Set for O(1) membership check.
    resident: HashSet<P>,

    /// Maximum number of resident pages.
    capacity: usize,
}

impl<P: PageKey> FifoPolicy<P> {
    /// Create an empty FIFO frame set.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            queue: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            capacity,
        })
    }

    /// Resident pages from oldest to newest.
    pub fn resident(&self) -> impl Iterator<Item = &P> {
        self.queue.iter()
    }
}

impl<P: PageKey> ReplacementPolicy<P> for FifoPolicy<P> {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn admit(&mut self, page: &P) -> Access {
        if self.resident.contains(page) {
            return Access::Hit;
        }

        if self.queue.len() >= self.capacity {
            if let Some(victim) = self.queue.pop_front() {
                self.resident.remove(&victim);
            }
        }
        self.queue.push_back(page.clone());
        self.resident.insert(page.clone());

        Access::Fault
    }
}
