//! Policy comparison and ranking.
//!
//! Runs every policy on identical input and ranks them by total head
//! movement. Ties are preserved: every policy sharing the minimum is
//! reported as best.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total movement | Sum of step distances of one run |
//! | Best movement | Minimum total movement over all policies |
//! | Efficiency | best / policy × 100 (display only, never used to rank) |
//! | Rank | 1 + number of policies with strictly less movement |

mod engine;
mod ranking;

pub use engine::{compare_all, compare_all_parallel, ComparisonResult};
pub use ranking::PolicyRanking;
