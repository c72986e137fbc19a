//! Per-run head state and step recording.

use tracing::{debug, trace};

use crate::models::{Distance, PolicyId, Position, SchedulingResult, Step};

/// Mutable state of a single policy run.
///
/// Owns the run's working copy of the pending requests. Created fresh
/// for every run and consumed by [`HeadTrace::finish`].
#[derive(Debug)]
pub(crate) struct HeadTrace {
    policy: PolicyId,
    head: Position,
    pending: Vec<Position>,
    service_order: Vec<Position>,
    steps: Vec<Step>,
    total_movement: Distance,
}

impl HeadTrace {
    /// Starts a run at `head` with `pending` in the order steps should record it.
    pub(crate) fn new(policy: PolicyId, head: Position, pending: Vec<Position>) -> Self {
        Self {
            policy,
            head,
            service_order: Vec::with_capacity(pending.len()),
            steps: Vec::with_capacity(pending.len()),
            pending,
            total_movement: 0,
        }
    }

    #[inline]
    pub(crate) fn head(&self) -> Position {
        self.head
    }

    pub(crate) fn pending(&self) -> &[Position] {
        &self.pending
    }

    /// Moves to the pending request at `index` and services it.
    pub(crate) fn service_at(&mut self, index: usize) {
        let to = self.pending[index];
        let step = Step::service(self.head, to, self.pending.clone());
        self.pending.remove(index);
        self.service_order.push(to);
        self.record(step);
    }

    /// Moves to `position` and services it. No-op if it is not pending.
    pub(crate) fn service(&mut self, position: Position) {
        if let Some(index) = self.pending.iter().position(|&p| p == position) {
            self.service_at(index);
        }
    }

    /// Moves to `to` without servicing anything.
    pub(crate) fn seek(&mut self, to: Position) {
        let step = Step::seek(self.head, to, self.pending.clone());
        self.record(step);
    }

    fn record(&mut self, step: Step) {
        debug!(
            policy = %self.policy,
            from = step.from,
            to = step.to,
            distance = step.distance,
            kind = ?step.kind,
            "head step"
        );
        self.total_movement += step.distance;
        self.head = step.to;
        self.steps.push(step);
    }

    pub(crate) fn finish(self) -> SchedulingResult {
        trace!(
            policy = %self.policy,
            serviced = self.service_order.len(),
            total_movement = self.total_movement,
            "run finished"
        );
        SchedulingResult {
            policy: self.policy,
            service_order: self.service_order,
            total_movement: self.total_movement,
            steps: self.steps,
        }
    }
}
