//! Aging replacement policy.
//!
//! Aging approximates LRU with a per-page shift register. Every reference
//! shifts every resident page's counter right by one bit; the referenced
//! page additionally gets its most-significant bit set. The page with the
//! smallest counter is the least recently used, approximately, and is the
//! eviction victim.
//!
//! # Counter life cycle (4-bit counters)
//! ```text
//! admit page 1      counter = 4 (0b0100)
//! age + mark 1      counter = 0b0010 | 0b1000 = 0b1010
//! age (not marked)  counter = 0b0101
//! age (not marked)  counter = 0b0010
//! ```

use crate::common::config::{DEFAULT_AGING_BITS, MAX_AGING_BITS};
use crate::common::{Error, PageKey, Result};
use crate::policy::{Access, ReplacementPolicy};

/// Counter value a page receives when it is admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterInit {
    /// The counter width itself, as a number (`bits = 8` admits with `8`).
    ///
    /// This is the classic behaviour and the default. A freshly admitted
    /// page ends its first step with a smaller counter than a page that was
    /// merely re-referenced in the same step.
    #[default]
    BitWidth,

    /// Only the most-significant bit set (`1 << (bits - 1)`).
    MostSignificantBit,
}

/// Parameters of the Aging policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgingConfig {
    /// Width of each recency counter, `1..=64`.
    pub bits: u32,

    /// Admission value of a new page's counter.
    pub init: CounterInit,
}

impl AgingConfig {
    /// Create a config with the given width and the default initialization.
    pub fn new(bits: u32) -> Self {
        Self {
            bits,
            init: CounterInit::default(),
        }
    }

    /// Use a different admission value.
    pub fn with_init(mut self, init: CounterInit) -> Self {
        self.init = init;
        self
    }

    /// Check that the counter has a well-defined most-significant bit.
    ///
    /// # Errors
    /// - `Error::InvalidAgingBits` if `bits` is 0 or wider than a `u64`
    pub fn validate(&self) -> Result<()> {
        if self.bits == 0 || self.bits > MAX_AGING_BITS {
            return Err(Error::InvalidAgingBits {
                bits: self.bits,
                max: MAX_AGING_BITS,
            });
        }
        Ok(())
    }

    /// Bit OR-ed into a counter when its page is referenced.
    #[inline]
    fn reference_bit(&self) -> u64 {
        1u64 << (self.bits - 1)
    }

    #[inline]
    fn initial_counter(&self) -> u64 {
        match self.init {
            CounterInit::BitWidth => u64::from(self.bits),
            CounterInit::MostSignificantBit => self.reference_bit(),
        }
    }
}

impl Default for AgingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_AGING_BITS)
    }
}

/// A resident page and its recency counter.
#[derive(Debug, Clone)]
struct AgingFrame<P> {
    page: P,
    counter: u64,
}

/// An Aging frame set of fixed capacity.
///
/// Frames are kept in admission order. The victim search scans them in that
/// order and takes the first minimum, so ties go to the page admitted
/// earliest among the tied ones.
pub struct AgingPolicy<P> {
    frames: Vec<AgingFrame<P>>,
    capacity: usize,
    config: AgingConfig,
}

impl<P: PageKey> AgingPolicy<P> {
    /// Create an empty Aging frame set.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    /// - `Error::InvalidAgingBits` if the counter width is unusable
    pub fn new(capacity: usize, config: AgingConfig) -> Result<Self> {
        config.validate()?;
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            frames: Vec::with_capacity(capacity),
            capacity,
            config,
        })
    }

    /// The policy parameters.
    pub fn config(&self) -> &AgingConfig {
        &self.config
    }

    /// Current counter of `page`, or `None` if it is not resident.
    pub fn counter(&self, page: &P) -> Option<u64> {
        self.frames
            .iter()
            .find(|f| &f.page == page)
            .map(|f| f.counter)
    }

    /// Resident pages with their counters, in admission order.
    pub fn resident(&self) -> impl Iterator<Item = (&P, u64)> {
        self.frames.iter().map(|f| (&f.page, f.counter))
    }

    /// Index of the first frame holding the minimum counter.
    fn victim(&self) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (idx, frame) in self.frames.iter().enumerate() {
            match best {
                Some((_, min)) if frame.counter >= min => {}
                _ => best = Some((idx, frame.counter)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Shift every counter and mark the referenced page.
    fn age(&mut self, referenced: &P) {
        let mark = self.config.reference_bit();
        for frame in &mut self.frames {
            frame.counter >>= 1;
            if &frame.page == referenced {
                frame.counter |= mark;
            }
        }
    }
}

impl<P: PageKey> ReplacementPolicy<P> for AgingPolicy<P> {
    fn name(&self) -> &'static str {
        "aging"
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn admit(&mut self, page: &P) -> Access {
        let access = if self.frames.iter().any(|f| &f.page == page) {
            Access::Hit
        } else {
            if self.frames.len() >= self.capacity {
                if let Some(idx) = self.victim() {
                    self.frames.remove(idx);
                }
            }
            self.frames.push(AgingFrame {
                page: page.clone(),
                counter: self.config.initial_counter(),
            });
            Access::Fault
        };

        // Runs on hits and faults alike, including the page just admitted.
        self.age(page);
        access
    }
}
