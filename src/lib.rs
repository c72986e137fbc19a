//! Disk-head scheduling simulation.
//!
//! Computes the order in which pending I/O requests on a one-dimensional
//! disk are serviced, the head movement each policy incurs, and a
//! step-by-step trace explaining how that movement adds up.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `DiskExtent`, `RequestSet`, `Step`,
//!   `SchedulingResult`
//! - **`policies`**: SSTF, SCAN and C-SCAN behind the `SchedulingPolicy` trait
//! - **`comparison`**: Runs every policy on identical input and ranks them
//! - **`validation`**: Caller-side input checks (range, duplicates)
//! - **`input`**: Line-oriented `key=value` simulation input loader
//! - **`generate`**: Random example request sets
//!
//! # Example
//!
//! ```
//! use u_disksched::comparison::compare_all;
//! use u_disksched::models::{DiskExtent, RequestSet};
//! use u_disksched::policies::PolicyId;
//!
//! let requests = RequestSet::new(vec![48, 54, 10, 90]);
//! let comparison = compare_all(&requests, 50, DiskExtent::new(100));
//!
//! assert_eq!(comparison.best_policies, vec![PolicyId::Scan]);
//! assert_eq!(comparison.best_movement(), 120);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 5.4

pub mod comparison;
mod error;
pub mod generate;
pub mod input;
pub mod models;
pub mod policies;
pub mod validation;

pub use error::{Error, Result};
