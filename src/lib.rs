//! xcadd - open files in an IDE so it registers them
//!
//! Files created outside Xcode do not show up in its project navigator until
//! Xcode opens them. xcadd walks a list of paths, skips the ones that do not
//! exist, and asks Xcode (through `osascript` or `xed`) to open the rest.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    FailedFile, RegisterOptions, RegisterReport, RegisterUseCase, SkippedEntry,
};
pub use config::{Config, ConfigWarning, Verbosity};
pub use domain::entities::CommandResult;
pub use domain::ports::{AppBridge, FileSystem, RegisterEvent, RegisterEventSink};
pub use domain::services::{FileAction, PlannedFile, Planner, RegisterPlan};
pub use domain::value_objects::{BridgeKind, FilePath, WorkingDir};
pub use error::{XcaddError, XcaddResult};
