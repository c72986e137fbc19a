//! Disk-head scheduling policies.
//!
//! Three interchangeable policies decide the order in which pending
//! requests are serviced:
//!
//! - **SSTF**: nearest request first, ties to the earliest-inserted
//! - **SCAN**: sweep up from the head, then back down
//! - **C-SCAN**: sweep up, wrap to position 0 without servicing, sweep up again
//!
//! Every policy is a pure function of its explicit inputs. Running the
//! same policy twice on the same input yields identical results.
//!
//! # Usage
//!
//! ```
//! use u_disksched::models::{DiskExtent, RequestSet};
//! use u_disksched::policies::{self, PolicyId};
//!
//! let requests = RequestSet::new(vec![48, 54, 10, 90]);
//! let result = policies::run_policy(PolicyId::Sstf, &requests, 50, DiskExtent::new(100));
//! assert_eq!(result.service_order, vec![48, 54, 90, 10]);
//! assert_eq!(result.total_movement, 124);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

mod cscan;
mod scan;
mod sstf;
mod trace;

pub use cscan::{run_cscan, CScan};
pub use scan::{run_scan, Scan};
pub use sstf::{run_sstf, Sstf};

pub use crate::models::PolicyId;

use crate::models::{DiskExtent, Position, RequestSet, SchedulingResult};
use crate::Result;
use std::fmt::Debug;

/// A disk-head scheduling policy.
///
/// Implementations must be pure: the result depends only on the
/// arguments, and no state survives between calls.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Identifier of this policy.
    fn id(&self) -> PolicyId;

    /// Runs the policy from `head` over `requests` on a disk of `extent`.
    ///
    /// Inputs are assumed valid (see [`crate::validation`]).
    fn schedule(&self, requests: &RequestSet, head: Position, extent: DiskExtent)
        -> SchedulingResult;

    /// Short name (e.g., "SSTF").
    fn name(&self) -> &'static str {
        self.id().name()
    }

    fn description(&self) -> &'static str {
        self.id().description()
    }
}

/// Returns the implementation for `id`.
pub fn policy(id: PolicyId) -> &'static dyn SchedulingPolicy {
    match id {
        PolicyId::Sstf => &Sstf,
        PolicyId::Scan => &Scan,
        PolicyId::CScan => &CScan,
    }
}

/// Runs the policy identified by `id`.
pub fn run_policy(
    id: PolicyId,
    requests: &RequestSet,
    head: Position,
    extent: DiskExtent,
) -> SchedulingResult {
    policy(id).schedule(requests, head, extent)
}

/// Runs a policy selected by its textual identifier.
///
/// # Errors
/// [`crate::Error::UnknownPolicy`] if `name` is not a known policy.
pub fn run_policy_by_name(
    name: &str,
    requests: &RequestSet,
    head: Position,
    extent: DiskExtent,
) -> Result<SchedulingResult> {
    let id: PolicyId = name.parse()?;
    Ok(run_policy(id, requests, head, extent))
}
