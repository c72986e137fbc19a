//! Disk scheduling domain models.
//!
//! Plain value types shared by every policy. All of them are created
//! fresh per run from caller-supplied input and never mutated after the
//! run that built them returns.
//!
//! # Domain Mappings
//!
//! | u-disksched | Hardware | Simulation UI |
//! |-------------|----------|---------------|
//! | DiskExtent | Cylinder count | Disk size field |
//! | Position | Cylinder / track | Marker on the disk line |
//! | RequestSet | I/O queue | Request list |
//! | Step | Arm movement | One animation frame |

mod disk;
mod policy;
mod result;
mod step;

pub use disk::{DiskExtent, Distance, Position, RequestSet};
pub use policy::PolicyId;
pub use result::SchedulingResult;
pub use step::{Step, StepKind};
