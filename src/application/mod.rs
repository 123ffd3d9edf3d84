//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RegisterUseCase` - Opens each listed file in the IDE, reporting per file

pub mod register;

pub use register::{FailedFile, RegisterOptions, RegisterReport, RegisterUseCase, SkippedEntry};
