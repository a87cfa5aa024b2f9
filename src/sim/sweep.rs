//! Sweep harness: replay a policy at every frame count from 1 to N.

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::common::{Error, PageKey, Result};
use crate::policy::PolicyKind;
use crate::sim::progress::{ProgressEvent, ProgressSink, TracingSink};
use crate::sim::replay;

/// Fault counts of one policy indexed by frame count.
///
/// `faults()[i]` is the fault count with `i + 1` frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultCurve {
    policy: &'static str,
    faults: Vec<u64>,
}

impl FaultCurve {
    pub fn new(policy: &'static str, faults: Vec<u64>) -> Self {
        Self { policy, faults }
    }

    pub fn policy(&self) -> &'static str {
        self.policy
    }

    pub fn faults(&self) -> &[u64] {
        &self.faults
    }

    /// Largest frame count in the curve.
    pub fn max_capacity(&self) -> usize {
        self.faults.len()
    }

    /// Fault count at `capacity` frames (1-based).
    pub fn at(&self, capacity: usize) -> Option<u64> {
        capacity.checked_sub(1).and_then(|i| self.faults.get(i).copied())
    }

    /// `(capacity, faults)` pairs in ascending capacity.
    pub fn points(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.faults.iter().enumerate().map(|(i, &f)| (i + 1, f))
    }

    /// Capacities where adding a frame increased the fault count
    /// (Belady's anomaly).
    pub fn anomalies(&self) -> Vec<usize> {
        self.faults
            .windows(2)
            .enumerate()
            .filter(|(_, w)| w[1] > w[0])
            .map(|(i, _)| i + 2)
            .collect()
    }

    pub fn into_faults(self) -> Vec<u64> {
        self.faults
    }
}

/// Curves of several policies over the same sequence and frame range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    curves: Vec<FaultCurve>,
}

impl Comparison {
    pub fn new(curves: Vec<FaultCurve>) -> Self {
        Self { curves }
    }

    pub fn curves(&self) -> &[FaultCurve] {
        &self.curves
    }

    pub fn curve(&self, policy: &str) -> Option<&FaultCurve> {
        self.curves.iter().find(|c| c.policy == policy)
    }

    pub fn max_capacity(&self) -> usize {
        self.curves.first().map_or(0, FaultCurve::max_capacity)
    }
}

impl fmt::Display for Comparison {
    /// Renders a `frames | <policy> | ...` table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}", "frames")?;
        for curve in &self.curves {
            write!(f, " | {:>8}", curve.policy)?;
        }
        writeln!(f)?;

        for capacity in 1..=self.max_capacity() {
            write!(f, "{:>6}", capacity)?;
            for curve in &self.curves {
                match curve.at(capacity) {
                    Some(faults) => write!(f, " | {:>8}", faults)?,
                    None => write!(f, " | {:>8}", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Reject a sweep before any replay runs.
fn check_sweep(kind: &PolicyKind, max_capacity: usize) -> Result<()> {
    if max_capacity == 0 {
        return Err(Error::InvalidCapacity(max_capacity));
    }
    kind.validate()
}

/// Replay `kind` at every capacity in `1..=max_capacity`, logging progress.
///
/// # Errors
/// - `Error::InvalidCapacity` if `max_capacity` is 0
/// - `Error::InvalidAgingBits` for an Aging width outside `1..=64`
///
/// # Example
/// ```
/// use pagesim::{sweep, PolicyKind};
///
/// let refs = [1u32, 2, 3, 1, 2, 3];
/// let curve = sweep(&PolicyKind::Fifo, &refs, 4).unwrap();
/// assert_eq!(curve.faults(), &[6, 6, 3, 3]);
/// ```
pub fn sweep<P: PageKey>(
    kind: &PolicyKind,
    references: &[P],
    max_capacity: usize,
) -> Result<FaultCurve> {
    sweep_with_sink(kind, references, max_capacity, &TracingSink)
}

/// Like [`sweep`], reporting progress to `sink`.
pub fn sweep_with_sink<P, S>(
    kind: &PolicyKind,
    references: &[P],
    max_capacity: usize,
    sink: &S,
) -> Result<FaultCurve>
where
    P: PageKey,
    S: ProgressSink + ?Sized,
{
    check_sweep(kind, max_capacity)?;

    let mut faults = Vec::with_capacity(max_capacity);
    for capacity in 1..=max_capacity {
        let count = replay(kind, references, capacity)?;
        sink.record(&ProgressEvent {
            policy: kind.name(),
            frames: capacity,
            faults: count,
        });
        faults.push(count);
    }

    Ok(FaultCurve::new(kind.name(), faults))
}

/// Like [`sweep_with_sink`], running capacities on the rayon pool.
///
/// Results are collected by capacity, so the curve is identical to the
/// sequential one. Progress events may arrive out of order.
#[cfg(feature = "parallel")]
pub fn sweep_parallel<P, S>(
    kind: &PolicyKind,
    references: &[P],
    max_capacity: usize,
    sink: &S,
) -> Result<FaultCurve>
where
    P: PageKey + Sync,
    S: ProgressSink + ?Sized,
{
    check_sweep(kind, max_capacity)?;

    let faults = (1..=max_capacity)
        .into_par_iter()
        .map(|capacity| -> Result<u64> {
            let count = replay(kind, references, capacity)?;
            sink.record(&ProgressEvent {
                policy: kind.name(),
                frames: capacity,
                faults: count,
            });
            Ok(count)
        })
        .collect::<Result<Vec<u64>>>()?;

    Ok(FaultCurve::new(kind.name(), faults))
}

/// Sweep every policy in `kinds` over the same sequence and range.
///
/// All policies are validated before the first replay, so a bad entry
/// anywhere in `kinds` fails without partial output.
pub fn compare<P: PageKey>(
    kinds: &[PolicyKind],
    references: &[P],
    max_capacity: usize,
) -> Result<Comparison> {
    compare_with_sink(kinds, references, max_capacity, &TracingSink)
}

/// Like [`compare`], reporting progress to `sink`.
pub fn compare_with_sink<P, S>(
    kinds: &[PolicyKind],
    references: &[P],
    max_capacity: usize,
    sink: &S,
) -> Result<Comparison>
where
    P: PageKey,
    S: ProgressSink + ?Sized,
{
    for kind in kinds {
        check_sweep(kind, max_capacity)?;
    }

    let curves = kinds
        .iter()
        .map(|kind| sweep_with_sink(kind, references, max_capacity, sink))
        .collect::<Result<Vec<_>>>()?;

    Ok(Comparison::new(curves))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::RecordingSink;

    #[test]
    fn test_sweep_shape() {
        let refs = [1u32, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
        for kind in [PolicyKind::Fifo, PolicyKind::aging(8)] {
            let curve = sweep(&kind, &refs, 7).unwrap();
            assert_eq!(curve.max_capacity(), 7);
            assert_eq!(curve.policy(), kind.name());
        }
    }

    #[test]
    fn test_sweep_belady_anomaly() {
        let refs = [1u32, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
        let curve = sweep(&PolicyKind::Fifo, &refs, 5).unwrap();

        assert_eq!(curve.at(3), Some(9));
        assert_eq!(curve.at(4), Some(10));
        assert_eq!(curve.at(5), Some(5));
        assert_eq!(curve.anomalies(), vec![4]);
    }

    #[test]
    fn test_sweep_matches_individual_replays() {
        let refs = [7u32, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
        let kind = PolicyKind::aging(8);
        let curve = sweep(&kind, &refs, 5).unwrap();

        for (capacity, faults) in curve.points() {
            assert_eq!(replay(&kind, &refs, capacity).unwrap(), faults);
        }
    }

    #[test]
    fn test_sweep_rejects_zero_max_capacity() {
        let sink = RecordingSink::new();
        let result = sweep_with_sink(&PolicyKind::Fifo, &[1u32], 0, &sink);

        assert!(matches!(result, Err(Error::InvalidCapacity(0))));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_sweep_progress_events() {
        let sink = RecordingSink::new();
        let curve = sweep_with_sink(&PolicyKind::Fifo, &[1u32, 2, 1], 3, &sink).unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 3);
        for (event, (capacity, faults)) in events.iter().zip(curve.points()) {
            assert_eq!(event.policy, "fifo");
            assert_eq!(event.frames, capacity);
            assert_eq!(event.faults, faults);
        }
    }

    #[test]
    fn test_curve_at_bounds() {
        let curve = FaultCurve::new("fifo", vec![5, 4, 3]);
        assert_eq!(curve.at(0), None);
        assert_eq!(curve.at(1), Some(5));
        assert_eq!(curve.at(3), Some(3));
        assert_eq!(curve.at(4), None);
        assert!(curve.anomalies().is_empty());
    }

    #[test]
    fn test_compare_validates_all_before_running() {
        let sink = RecordingSink::new();
        let kinds = [PolicyKind::Fifo, PolicyKind::aging(0)];
        let result = compare_with_sink(&kinds, &[1u32, 2, 3], 3, &sink);

        assert!(matches!(result, Err(Error::InvalidAgingBits { .. })));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_compare_table() {
        let kinds = [PolicyKind::Fifo, PolicyKind::aging(8)];
        let comparison = compare(&kinds, &[1u32, 2, 1, 3], 2).unwrap();

        assert_eq!(comparison.curves().len(), 2);
        assert_eq!(comparison.max_capacity(), 2);
        assert!(comparison.curve("aging").is_some());

        let table = comparison.to_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("fifo"));
        assert!(lines[0].contains("aging"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_sweep_matches_sequential() {
        let refs: Vec<u32> = (0..500u32).map(|i| (i * 7 + i / 3) % 23).collect();
        for kind in [PolicyKind::Fifo, PolicyKind::aging(8)] {
            let sink = RecordingSink::new();
            let parallel = sweep_parallel(&kind, &refs, 12, &sink).unwrap();
            let sequential = sweep(&kind, &refs, 12).unwrap();

            assert_eq!(parallel, sequential);
            assert_eq!(sink.len(), 12);
        }
    }
}
