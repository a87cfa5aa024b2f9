//! Configuration constants for pagesim.
//!
//! Defaults reproduce the classic FIFO-vs-Aging experiment: 1000 references
//! over 100 pages, swept from 1 to 20 frames with 8-bit aging counters.

/// Default width of an Aging recency counter, in bits.
pub const DEFAULT_AGING_BITS: u32 = 8;

/// Widest supported Aging counter.
///
/// Counters are stored in a `u64`, so bit 63 is the highest MSB we can set.
pub const MAX_AGING_BITS: u32 = u64::BITS;

/// Default upper bound of a frame-count sweep (inclusive).
pub const DEFAULT_MAX_FRAMES: usize = 20;

/// Default length of a generated reference sequence.
pub const DEFAULT_NUM_REFERENCES: usize = 1000;

/// Default number of distinct pages a generated sequence draws from.
pub const DEFAULT_NUM_PAGES: u32 = 100;

/// Default RNG seed for workload generation.
pub const DEFAULT_SEED: u64 = 42;

// ============================================================================
// Hot/cold workload shape
// ============================================================================

/// Fraction of pages that are "hot".
pub const HOT_PAGE_FRACTION: f64 = 0.2;

/// Share of all references that land on hot pages.
pub const HOT_ACCESS_SHARE: f64 = 0.8;

/// Zipf exponent used to weight hot pages.
pub const HOT_ZIPF_EXPONENT: f64 = 1.5;

/// Zipf exponent used to weight cold pages.
pub const COLD_ZIPF_EXPONENT: f64 = 2.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_aging_bits_fit_counter() {
        assert!(DEFAULT_AGING_BITS >= 1);
        assert!(DEFAULT_AGING_BITS <= MAX_AGING_BITS);
        assert_eq!(MAX_AGING_BITS, 64);
    }

    #[test]
    fn test_access_shares_sum_to_one() {
        let cold_share = 1.0 - HOT_ACCESS_SHARE;
        assert!((HOT_ACCESS_SHARE + cold_share - 1.0).abs() < f64::EPSILON);
        assert!(HOT_PAGE_FRACTION > 0.0 && HOT_PAGE_FRACTION < 1.0);
    }
}
