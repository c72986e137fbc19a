//! Policy identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Identifies one of the built-in scheduling policies.
///
/// Ordering follows declaration order, which is also the order in which
/// comparisons run and report policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PolicyId {
    /// Shortest Seek Time First.
    #[serde(rename = "SSTF")]
    Sstf,
    /// Elevator.
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN.
    #[serde(rename = "C-SCAN")]
    CScan,
}

impl PolicyId {
    /// Every policy, in comparison order.
    pub const ALL: [PolicyId; 3] = [PolicyId::Sstf, PolicyId::Scan, PolicyId::CScan];

    /// Short identifier (e.g., "SSTF", "C-SCAN").
    pub fn name(&self) -> &'static str {
        match self {
            PolicyId::Sstf => "SSTF",
            PolicyId::Scan => "SCAN",
            PolicyId::CScan => "C-SCAN",
        }
    }

    /// Human-readable explanation of how the policy moves the head.
    pub fn description(&self) -> &'static str {
        match self {
            PolicyId::Sstf => {
                "Always services the pending request closest to the current head position, \
                 minimizing each individual seek."
            }
            PolicyId::Scan => {
                "Elevator: sweeps toward the high end servicing requests on the way, then \
                 reverses and services the remaining requests on the way back."
            }
            PolicyId::CScan => {
                "Services requests in one direction only. After the last request on the high \
                 side the head runs to the end of the disk and returns to the start without \
                 servicing anything, then resumes the same sweep."
            }
        }
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sstf" => Ok(PolicyId::Sstf),
            "scan" => Ok(PolicyId::Scan),
            "cscan" | "c-scan" | "c_scan" => Ok(PolicyId::CScan),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
