//! Ranking rows for comparison tables.

use serde::{Deserialize, Serialize};

use crate::models::{Distance, PolicyId};

/// One row of a policy comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRanking {
    pub policy: PolicyId,
    pub total_movement: Distance,
    /// best / total × 100, in percent.
    pub efficiency: f64,
    /// 1-based; tied policies share a rank.
    pub rank: usize,
}

/// `best / movement × 100`.
///
/// A policy that moved as little as the best is 100% efficient, which
/// also covers the case where both moved zero.
pub(crate) fn efficiency_percent(best: Distance, movement: Distance) -> f64 {
    if movement == 0 || movement == best {
        100.0
    } else {
        best as f64 / movement as f64 * 100.0
    }
}
