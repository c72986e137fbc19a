//! Comparison engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::thread;

use tracing::debug;

use super::ranking::{efficiency_percent, PolicyRanking};
use crate::models::{DiskExtent, Distance, PolicyId, Position, RequestSet, SchedulingResult};
use crate::policies::run_policy;

/// Results of every policy on one input, with the best ones marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// One result per policy, keyed in comparison order.
    pub per_policy: BTreeMap<PolicyId, SchedulingResult>,
    /// Every policy whose total movement equals the minimum. Never empty.
    pub best_policies: Vec<PolicyId>,
}

impl ComparisonResult {
    fn from_results(per_policy: BTreeMap<PolicyId, SchedulingResult>) -> Self {
        let best = min_movement(&per_policy);
        let best_policies = per_policy
            .iter()
            .filter(|(_, r)| r.total_movement == best)
            .map(|(&id, _)| id)
            .collect();
        Self {
            per_policy,
            best_policies,
        }
    }

    /// Minimum total movement over all policies.
    pub fn best_movement(&self) -> Distance {
        min_movement(&self.per_policy)
    }

    pub fn result(&self, id: PolicyId) -> Option<&SchedulingResult> {
        self.per_policy.get(&id)
    }

    pub fn is_best(&self, id: PolicyId) -> bool {
        self.best_policies.contains(&id)
    }

    /// Efficiency of `id` relative to the best policy, in percent.
    ///
    /// `None` if `id` was not part of the comparison.
    pub fn efficiency(&self, id: PolicyId) -> Option<f64> {
        self.result(id)
            .map(|r| efficiency_percent(self.best_movement(), r.total_movement))
    }

    /// Policies ordered by total movement.
    ///
    /// Tied policies share a rank and keep comparison order.
    pub fn ranking(&self) -> Vec<PolicyRanking> {
        let best = self.best_movement();
        let mut rows: Vec<PolicyRanking> = self
            .per_policy
            .iter()
            .map(|(&policy, r)| PolicyRanking {
                policy,
                total_movement: r.total_movement,
                efficiency: efficiency_percent(best, r.total_movement),
                rank: 1 + self
                    .per_policy
                    .values()
                    .filter(|other| other.total_movement < r.total_movement)
                    .count(),
            })
            .collect();
        rows.sort_by_key(|row| (row.total_movement, row.policy));
        rows
    }
}

fn min_movement(per_policy: &BTreeMap<PolicyId, SchedulingResult>) -> Distance {
    per_policy
        .values()
        .map(|r| r.total_movement)
        .min()
        .unwrap_or(0)
}

/// Runs SSTF, SCAN and C-SCAN on identical input.
pub fn compare_all(requests: &RequestSet, head: Position, extent: DiskExtent) -> ComparisonResult {
    let per_policy: BTreeMap<_, _> = PolicyId::ALL
        .into_iter()
        .map(|id| (id, run_policy(id, requests, head, extent)))
        .collect();
    let comparison = ComparisonResult::from_results(per_policy);
    debug!(
        best = ?comparison.best_policies,
        movement = comparison.best_movement(),
        "policies compared"
    );
    comparison
}

/// Same as [`compare_all`], running each policy on its own thread.
///
/// Runs share no state, so the result is identical to the sequential one.
pub fn compare_all_parallel(
    requests: &RequestSet,
    head: Position,
    extent: DiskExtent,
) -> ComparisonResult {
    let per_policy: BTreeMap<_, _> = thread::scope(|scope| {
        let handles: Vec<_> = PolicyId::ALL
            .into_iter()
            .map(|id| scope.spawn(move || (id, run_policy(id, requests, head, extent))))
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(entry) => entry,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });
    ComparisonResult::from_results(per_policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn scenario() -> ComparisonResult {
        compare_all(
            &RequestSet::new(vec![48, 54, 10, 90]),
            50,
            DiskExtent::new(100),
        )
    }

    #[test]
    fn test_compare_scenario() {
        let cmp = scenario();
        assert_eq!(cmp.per_policy.len(), 3);
        assert_eq!(cmp.result(PolicyId::Sstf).unwrap().total_movement, 124);
        assert_eq!(cmp.result(PolicyId::Scan).unwrap().total_movement, 120);
        assert_eq!(cmp.result(PolicyId::CScan).unwrap().total_movement, 196);
        assert_eq!(cmp.best_policies, vec![PolicyId::Scan]);
        assert_eq!(cmp.best_movement(), 120);
        assert!(cmp.is_best(PolicyId::Scan));
        assert!(!cmp.is_best(PolicyId::Sstf));
    }

    #[test]
    fn test_compare_ties_are_kept() {
        // Everything above the head: SSTF, SCAN and C-SCAN all sweep up.
        let cmp = compare_all(&RequestSet::new(vec![30, 20, 40]), 10, DiskExtent::new(50));
        assert_eq!(cmp.best_policies, PolicyId::ALL.to_vec());
        assert_eq!(cmp.best_movement(), 30);
    }

    #[test]
    fn test_compare_partial_tie() {
        // SSTF and SCAN both go 60 then 40; C-SCAN has to wrap.
        let cmp = compare_all(&RequestSet::new(vec![40, 60]), 55, DiskExtent::new(100));
        assert_eq!(cmp.best_policies, vec![PolicyId::Sstf, PolicyId::Scan]);
        assert_eq!(cmp.best_movement(), 25);
    }

    #[test]
    fn test_compare_empty_requests() {
        let cmp = compare_all(&RequestSet::default(), 25, DiskExtent::new(50));
        assert_eq!(cmp.best_policies, PolicyId::ALL.to_vec());
        assert_eq!(cmp.best_movement(), 0);
        for id in PolicyId::ALL {
            assert!((cmp.efficiency(id).unwrap() - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_efficiency() {
        let cmp = scenario();
        assert!((cmp.efficiency(PolicyId::Scan).unwrap() - 100.0).abs() < 1e-10);
        let sstf = 120.0 / 124.0 * 100.0;
        assert!((cmp.efficiency(PolicyId::Sstf).unwrap() - sstf).abs() < 1e-10);
        let cscan = 120.0 / 196.0 * 100.0;
        assert!((cmp.efficiency(PolicyId::CScan).unwrap() - cscan).abs() < 1e-10);
    }

    #[test]
    fn test_ranking_order() {
        let ranking = scenario().ranking();
        let order: Vec<_> = ranking.iter().map(|r| (r.policy, r.rank)).collect();
        assert_eq!(
            order,
            vec![(PolicyId::Scan, 1), (PolicyId::Sstf, 2), (PolicyId::CScan, 3)]
        );
    }

    #[test]
    fn test_ranking_shares_rank_on_tie() {
        let cmp = compare_all(&RequestSet::new(vec![40, 60]), 55, DiskExtent::new(100));
        let ranks: Vec<_> = cmp.ranking().iter().map(|r| (r.policy, r.rank)).collect();
        assert_eq!(
            ranks,
            vec![(PolicyId::Sstf, 1), (PolicyId::Scan, 1), (PolicyId::CScan, 3)]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let size = rng.random_range(1..=500u64);
            let head = rng.random_range(0..size);
            let requests = crate::generate::random_requests(&mut rng, DiskExtent::new(size), 12);
            let extent = DiskExtent::new(size);
            assert_eq!(
                compare_all(&requests, head, extent),
                compare_all_parallel(&requests, head, extent)
            );
        }
    }

    #[test]
    fn test_best_is_minimum_on_random_input() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            let size = rng.random_range(1..=300u64);
            let head = rng.random_range(0..size);
            let extent = DiskExtent::new(size);
            let requests = crate::generate::random_requests(&mut rng, extent, 10);
            let cmp = compare_all(&requests, head, extent);

            assert!(!cmp.best_policies.is_empty());
            let min = cmp.per_policy.values().map(|r| r.total_movement).min().unwrap();
            for id in PolicyId::ALL {
                let movement = cmp.per_policy[&id].total_movement;
                assert_eq!(cmp.is_best(id), movement == min);
            }
        }
    }

    #[test]
    fn test_comparison_serializes() {
        let cmp = scenario();
        let json = serde_json::to_value(&cmp).unwrap();
        assert_eq!(json["best_policies"][0], "SCAN");
        assert_eq!(json["per_policy"]["C-SCAN"]["total_movement"], 196);
    }
}
