//! Replay statistics.

use std::fmt;

/// Counters gathered over one replay.
///
/// # Example
/// ```
/// use pagesim::ReplayStats;
///
/// let stats = ReplayStats { references: 10, hits: 7, faults: 3, evictions: 1 };
/// assert_eq!(stats.hit_rate(), 0.7);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayStats {
    /// Number of references processed.
    pub references: u64,

    /// References that found their page resident.
    pub hits: u64,

    /// References that had to load their page.
    pub faults: u64,

    /// Faults that first had to evict a resident page.
    pub evictions: u64,
}

impl ReplayStats {
    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for ReplayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ refs: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = ReplayStats::default();
        assert_eq!(stats.faults, 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let stats = ReplayStats {
            references: 10,
            hits: 7,
            faults: 3,
            evictions: 0,
        };
        assert_eq!(stats.hit_rate(), 0.7);
        assert_eq!(stats.fault_rate(), 0.3);
    }

    #[test]
    fn test_stats_display() {
        let stats = ReplayStats {
            references: 100,
            hits: 80,
            faults: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("80.00%"));
    }
}
