//! SCAN (elevator).
//!
//! # Algorithm
//!
//! 1. Service every request at or above the head, ascending.
//! 2. Reverse and service every request below the head, descending.
//!
//! The head reverses at the last request of the upward sweep; it does not
//! travel on to the physical edge of the disk when no request lies there.
//! Every step is a service step.
//!
//! # Complexity
//! O(n log n) for the sort, O(n²) worst case for pending bookkeeping.

use super::trace::HeadTrace;
use super::{PolicyId, SchedulingPolicy};
use crate::models::{DiskExtent, Position, RequestSet, SchedulingResult};

/// Elevator scheduling, initially sweeping toward the high end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scan;

impl SchedulingPolicy for Scan {
    fn id(&self) -> PolicyId {
        PolicyId::Scan
    }

    fn schedule(
        &self,
        requests: &RequestSet,
        head: Position,
        extent: DiskExtent,
    ) -> SchedulingResult {
        run_scan(requests, head, extent)
    }
}

/// Runs SCAN from `head`.
///
/// `_extent` is accepted for signature parity with C-SCAN; this SCAN
/// never seeks to a boundary.
pub fn run_scan(requests: &RequestSet, head: Position, _extent: DiskExtent) -> SchedulingResult {
    let sorted = requests.sorted();
    let split = sorted.partition_point(|&p| p < head);
    let (below, at_or_above) = sorted.split_at(split);

    let mut run = HeadTrace::new(PolicyId::Scan, head, sorted.clone());
    for &position in at_or_above.iter().chain(below.iter().rev()) {
        run.service(position);
    }

    run.finish()
}
