//! Domain Layer
//!
//! The core of xcadd: what a registration run decides, without touching
//! the file system or spawning processes.
//!
//! ## Structure
//!
//! - `entities/` - Outcomes produced during a run (CommandResult)
//! - `value_objects/` - Immutable inputs (FilePath, WorkingDir, BridgeKind)
//! - `services/` - Pure planning over the file list
//! - `ports/` - Interface definitions for infrastructure
//!
//! All I/O goes through the traits in `ports/`, so the registrar can be
//! driven by in-memory mocks in tests.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
