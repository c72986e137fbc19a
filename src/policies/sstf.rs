//! Shortest Seek Time First.
//!
//! # Algorithm
//!
//! 1. Among the pending requests, pick the one nearest the head.
//! 2. On a distance tie, the earliest in the pending sequence wins.
//! 3. Service it, move the head there, repeat until nothing is pending.
//!
//! The pending sequence keeps insertion order, so ties always resolve to
//! the earliest-inserted request.
//!
//! # Complexity
//! O(n²): a linear nearest-neighbour scan per selection.

use super::trace::HeadTrace;
use super::{PolicyId, SchedulingPolicy};
use crate::models::{DiskExtent, Position, RequestSet, SchedulingResult};

/// Shortest Seek Time First. Ignores the disk extent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl SchedulingPolicy for Sstf {
    fn id(&self) -> PolicyId {
        PolicyId::Sstf
    }

    fn schedule(
        &self,
        requests: &RequestSet,
        head: Position,
        _extent: DiskExtent,
    ) -> SchedulingResult {
        run_sstf(requests, head)
    }
}

/// Runs SSTF from `head`.
pub fn run_sstf(requests: &RequestSet, head: Position) -> SchedulingResult {
    let mut run = HeadTrace::new(PolicyId::Sstf, head, requests.as_slice().to_vec());

    while let Some(index) = nearest(run.pending(), run.head()) {
        run.service_at(index);
    }

    run.finish()
}

/// Index of the pending position nearest `head`; first one wins ties.
fn nearest(pending: &[Position], head: Position) -> Option<usize> {
    pending
        .iter()
        .enumerate()
        .min_by_key(|&(_, &p)| p.abs_diff(head))
        .map(|(index, _)| index)
}
