//! Scheduling result model.

use serde::{Deserialize, Serialize};

use super::{Distance, PolicyId, Position, Step};

/// Outcome of running one policy over one request set.
///
/// # Invariants
/// - `service_order` holds every original request exactly once.
/// - `total_movement` equals the sum of `steps[i].distance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Policy that produced this result.
    pub policy: PolicyId,
    /// Requests in the order they were serviced.
    pub service_order: Vec<Position>,
    /// Sum of all step distances.
    pub total_movement: Distance,
    /// Ordered head movements, service and seek-only.
    pub steps: Vec<Step>,
}

impl SchedulingResult {
    /// An empty result: nothing serviced, no movement.
    pub fn empty(policy: PolicyId) -> Self {
        Self {
            policy,
            service_order: Vec::new(),
            total_movement: 0,
            steps: Vec::new(),
        }
    }

    /// Steps that serviced a request.
    pub fn service_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| s.is_service())
    }

    /// Seek-only steps (C-SCAN wrap-around).
    pub fn seek_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| s.is_seek())
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Movement recomputed from the trace. Always equals `total_movement`.
    pub fn movement_from_steps(&self) -> Distance {
        self.steps.iter().map(|s| s.distance).sum()
    }

    /// Mean movement per serviced request, seeks included. `0.0` if
    /// nothing was serviced.
    pub fn average_seek_distance(&self) -> f64 {
        if self.service_order.is_empty() {
            0.0
        } else {
            self.total_movement as f64 / self.service_order.len() as f64
        }
    }
}
