//! Replay engine: one policy, one sequence, one frame count.

use crate::common::{PageKey, Result};
use crate::policy::{Access, PolicyKind, ReplacementPolicy};
use crate::sim::ReplayStats;

/// Count the page faults of `kind` over `references` with `capacity` frames.
///
/// A fresh frame set is built for the call and dropped at the end, so
/// repeated calls with the same arguments return the same count.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
/// - `Error::InvalidAgingBits` for an Aging width outside `1..=64`
///
/// # Example
/// ```
/// use pagesim::{replay, PolicyKind};
///
/// let refs = [1u32, 2, 3, 4, 1, 2, 5];
/// assert_eq!(replay(&PolicyKind::Fifo, &refs, 3).unwrap(), 7);
/// ```
pub fn replay<P: PageKey>(kind: &PolicyKind, references: &[P], capacity: usize) -> Result<u64> {
    replay_with_stats(kind, references, capacity).map(|stats| stats.faults)
}

/// Like [`replay`], but returns hits and evictions as well.
pub fn replay_with_stats<P: PageKey>(
    kind: &PolicyKind,
    references: &[P],
    capacity: usize,
) -> Result<ReplayStats> {
    let mut policy = kind.build(capacity)?;
    Ok(run(&mut policy, references))
}

/// Drive an already-built policy through `references` in order.
///
/// Pages only leave a frame set by eviction, so evictions are the faults
/// that did not end up as a resident page.
pub fn run<P, R>(policy: &mut R, references: &[P]) -> ReplayStats
where
    P: PageKey,
    R: ReplacementPolicy<P> + ?Sized,
{
    let resident_before = policy.len() as u64;
    let mut stats = ReplayStats::default();

    for page in references {
        stats.references += 1;
        match policy.admit(page) {
            Access::Hit => stats.hits += 1,
            Access::Fault => stats.faults += 1,
        }
    }

    stats.evictions = (resident_before + stats.faults).saturating_sub(policy.len() as u64);
    stats
}
