//! Domain Services
//!
//! Pure business logic services that operate on domain values.
//! File checks go through the `FileSystem` port, so these stay testable.

mod planner;

pub use planner::{FileAction, PlannedFile, Planner, RegisterPlan};
