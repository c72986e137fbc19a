//! Circular SCAN.
//!
//! # Algorithm
//!
//! 1. Service every request at or above the head, ascending.
//! 2. If requests remain below the head:
//!    a. seek to the last position (`size - 1`) unless already there,
//!    b. seek from `size - 1` to `0` without servicing (wrap-around),
//!    c. service the remaining requests ascending from `0`.
//!
//! Both seeks count toward total movement.
//!
//! # Complexity
//! O(n log n) for the sort, O(n²) worst case for pending bookkeeping.

use super::trace::HeadTrace;
use super::{PolicyId, SchedulingPolicy};
use crate::models::{DiskExtent, Position, RequestSet, SchedulingResult};

/// Circular SCAN, sweeping toward the high end only.
#[derive(Debug, Clone, Copy, Default)]
pub struct CScan;

impl SchedulingPolicy for CScan {
    fn id(&self) -> PolicyId {
        PolicyId::CScan
    }

    fn schedule(
        &self,
        requests: &RequestSet,
        head: Position,
        extent: DiskExtent,
    ) -> SchedulingResult {
        run_cscan(requests, head, extent)
    }
}

/// Runs C-SCAN from `head` on a disk of `extent`.
pub fn run_cscan(requests: &RequestSet, head: Position, extent: DiskExtent) -> SchedulingResult {
    let sorted = requests.sorted();
    let split = sorted.partition_point(|&p| p < head);
    let (below, at_or_above) = sorted.split_at(split);

    let mut run = HeadTrace::new(PolicyId::CScan, head, sorted.clone());
    for &position in at_or_above {
        run.service(position);
    }

    if !below.is_empty() {
        let last = extent.last_position();
        if run.head() != last {
            run.seek(last);
        }
        run.seek(0);
        for &position in below {
            run.service(position);
        }
    }

    run.finish()
}
