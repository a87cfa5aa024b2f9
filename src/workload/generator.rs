//! Seeded reference-sequence generators.
//!
//! Two shapes are supported:
//! - **Uniform**: every page equally likely.
//! - **Hot/cold**: the first 20% of pages ("hot") receive 80% of the
//!   references. Within each class, page weights are Zipf-distributed
//!   samples, so a few pages dominate their class.
//!
//! Generation always goes through an explicit seed so a sweep can be
//! reproduced exactly.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::config::{
    COLD_ZIPF_EXPONENT, HOT_ACCESS_SHARE, HOT_PAGE_FRACTION, HOT_ZIPF_EXPONENT,
};
use crate::common::{Error, PageId, Result};

/// Shape and size of a generated reference sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadSpec {
    Uniform { references: usize, pages: u32 },
    HotCold { references: usize, pages: u32 },
}

impl WorkloadSpec {
    /// Length of the generated sequence.
    pub fn references(&self) -> usize {
        match *self {
            WorkloadSpec::Uniform { references, .. } | WorkloadSpec::HotCold { references, .. } => {
                references
            }
        }
    }

    /// Page ids are drawn from `0..pages`.
    pub fn pages(&self) -> u32 {
        match *self {
            WorkloadSpec::Uniform { pages, .. } | WorkloadSpec::HotCold { pages, .. } => pages,
        }
    }

    /// Generate the sequence from `seed`.
    ///
    /// # Errors
    /// - `Error::InvalidWorkload` if there are no pages to draw from
    pub fn generate(&self, seed: u64) -> Result<Vec<PageId>> {
        if self.pages() == 0 {
            return Err(Error::InvalidWorkload(
                "page count must be at least 1".to_string(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let references = match *self {
            WorkloadSpec::Uniform { references, pages } => {
                uniform_references(&mut rng, references, pages)
            }
            WorkloadSpec::HotCold { references, pages } => {
                hot_cold_references(&mut rng, references, pages)?
            }
        };

        tracing::debug!(
            target: "pagesim::workload",
            seed,
            references = references.len(),
            pages = self.pages(),
            "generated reference sequence"
        );
        Ok(references)
    }
}

/// Draw `references` page ids uniformly from `0..pages`.
///
/// # Panics
/// Panics if `pages` is 0 and `references` is not.
pub fn uniform_references<R: Rng>(rng: &mut R, references: usize, pages: u32) -> Vec<PageId> {
    (0..references)
        .map(|_| PageId(rng.gen_range(0..pages)))
        .collect()
}

/// Draw `references` page ids from the hot/cold weighting of `0..pages`.
pub fn hot_cold_references<R: Rng>(
    rng: &mut R,
    references: usize,
    pages: u32,
) -> Result<Vec<PageId>> {
    let weights = hot_cold_weights(rng, pages);
    let dist = WeightedIndex::new(&weights).map_err(|e| Error::InvalidWorkload(e.to_string()))?;

    Ok((0..references)
        .map(|_| PageId(dist.sample(rng) as u32))
        .collect())
}

/// Per-page selection probabilities, hot pages first. Sums to 1.
pub fn hot_cold_weights<R: Rng>(rng: &mut R, pages: u32) -> Vec<f64> {
    let hot = (f64::from(pages) * HOT_PAGE_FRACTION) as u32;
    let cold = pages - hot;

    let (hot_share, cold_share) = match (hot, cold) {
        (0, _) => (0.0, 1.0),
        (_, 0) => (1.0, 0.0),
        _ => (HOT_ACCESS_SHARE, 1.0 - HOT_ACCESS_SHARE),
    };

    let mut weights = zipf_weights(rng, hot, HOT_ZIPF_EXPONENT, hot_share);
    weights.extend(zipf_weights(rng, cold, COLD_ZIPF_EXPONENT, cold_share));
    weights
}

/// `count` Zipf samples scaled to sum to `share`.
fn zipf_weights<R: Rng>(rng: &mut R, count: u32, exponent: f64, share: f64) -> Vec<f64> {
    let samples: Vec<f64> = (0..count).map(|_| zipf_sample(rng, exponent)).collect();
    let total: f64 = samples.iter().sum();
    if total == 0.0 {
        return samples;
    }
    samples.into_iter().map(|s| s / total * share).collect()
}

/// One draw from the unbounded Zipf distribution with exponent `a > 1`.
///
/// Rejection sampling after Devroye, "Non-Uniform Random Variate
/// Generation", p. 551.
fn zipf_sample<R: Rng>(rng: &mut R, a: f64) -> f64 {
    let am1 = a - 1.0;
    let b = 2f64.powf(am1);
    loop {
        // U in (0, 1] so the power below stays finite
        let u = 1.0 - rng.gen::<f64>();
        let v = rng.gen::<f64>();
        let x = u.powf(-1.0 / am1).floor();
        if !(1.0..=u64::MAX as f64).contains(&x) {
            continue;
        }

        let t = (1.0 + 1.0 / x).powf(am1);
        if v * x * (t - 1.0) / (b - 1.0) <= t / b {
            return x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_reproducible() {
        for spec in [
            WorkloadSpec::Uniform { references: 500, pages: 50 },
            WorkloadSpec::HotCold { references: 500, pages: 50 },
        ] {
            let a = spec.generate(42).unwrap();
            let b = spec.generate(42).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.len(), 500);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let spec = WorkloadSpec::Uniform { references: 1000, pages: 100 };
        assert_ne!(spec.generate(1).unwrap(), spec.generate(2).unwrap());
    }

    #[test]
    fn test_ids_within_page_range() {
        for spec in [
            WorkloadSpec::Uniform { references: 2000, pages: 17 },
            WorkloadSpec::HotCold { references: 2000, pages: 17 },
        ] {
            let refs = spec.generate(7).unwrap();
            assert!(refs.iter().all(|p| p.0 < 17));
        }
    }

    #[test]
    fn test_zero_pages_rejected() {
        let spec = WorkloadSpec::HotCold { references: 10, pages: 0 };
        assert!(matches!(spec.generate(42), Err(Error::InvalidWorkload(_))));
    }

    #[test]
    fn test_zero_references_is_empty() {
        let spec = WorkloadSpec::Uniform { references: 0, pages: 10 };
        assert!(spec.generate(42).unwrap().is_empty());
    }

    #[test]
    fn test_hot_cold_weights_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = hot_cold_weights(&mut rng, 100);

        assert_eq!(weights.len(), 100);
        let hot: f64 = weights[..20].iter().sum();
        let cold: f64 = weights[20..].iter().sum();
        assert!((hot - 0.8).abs() < 1e-9);
        assert!((cold - 0.2).abs() < 1e-9);
        assert!(weights.iter().all(|w| *w > 0.0));
    }

    #[test]
    fn test_single_page_is_all_cold() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = hot_cold_weights(&mut rng, 1);
        assert_eq!(weights.len(), 1);
        assert!((weights[0] - 1.0).abs() < 1e-9);

        let spec = WorkloadSpec::HotCold { references: 20, pages: 1 };
        assert!(spec.generate(3).unwrap().iter().all(|p| p.0 == 0));
    }

    #[test]
    fn test_hot_pages_dominate() {
        let spec = WorkloadSpec::HotCold { references: 5000, pages: 100 };
        let refs = spec.generate(42).unwrap();
        let hot = refs.iter().filter(|p| p.0 < 20).count();

        // Expected share is 80%
        assert!(hot > 3500, "only {hot} of 5000 references were hot");
    }

    #[test]
    fn test_zipf_samples_are_positive_integers() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let x = zipf_sample(&mut rng, 1.5);
            assert!(x >= 1.0);
            assert_eq!(x, x.floor());
        }
    }
}
