//! Step trace model.
//!
//! Each policy run emits an ordered list of atomic head movements. The
//! list is the auditable explanation of the run's total movement and is
//! what a presentation layer replays to animate the head.

use serde::{Deserialize, Serialize};

use super::{Distance, Position};

/// Whether a head movement satisfied a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// The head moved onto a pending request and serviced it.
    Service,
    /// The head moved to a disk boundary without servicing anything
    /// (C-SCAN run-out and wrap-around).
    Seek,
}

/// One atomic head movement.
///
/// # Invariants
/// - `distance == |to - from|`
/// - `Service`: `to` is in `pending_before`, and `pending_after` is
///   `pending_before` without exactly that position.
/// - `Seek`: `pending_after == pending_before`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Head position before the move.
    pub from: Position,
    /// Head position after the move.
    pub to: Position,
    /// Movement cost of this step.
    pub distance: Distance,
    /// Pending requests before the move.
    pub pending_before: Vec<Position>,
    /// Pending requests after the move.
    pub pending_after: Vec<Position>,
    /// Service or seek-only.
    pub kind: StepKind,
}

impl Step {
    /// A movement that services the request at `to`.
    ///
    /// `pending_after` drops the first occurrence of `to` and keeps the
    /// relative order of everything else.
    pub fn service(from: Position, to: Position, pending_before: Vec<Position>) -> Self {
        let mut pending_after = pending_before.clone();
        if let Some(index) = pending_after.iter().position(|&p| p == to) {
            pending_after.remove(index);
        }
        Self {
            from,
            to,
            distance: from.abs_diff(to),
            pending_before,
            pending_after,
            kind: StepKind::Service,
        }
    }

    /// A movement to a disk boundary that services nothing.
    pub fn seek(from: Position, to: Position, pending: Vec<Position>) -> Self {
        Self {
            from,
            to,
            distance: from.abs_diff(to),
            pending_after: pending.clone(),
            pending_before: pending,
            kind: StepKind::Seek,
        }
    }

    #[inline]
    pub fn is_service(&self) -> bool {
        self.kind == StepKind::Service
    }

    #[inline]
    pub fn is_seek(&self) -> bool {
        self.kind == StepKind::Seek
    }
}
