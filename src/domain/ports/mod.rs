//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod app_bridge;
pub mod file_system;
pub mod register_events;

pub use app_bridge::AppBridge;
pub use file_system::FileSystem;
pub use register_events::{NoopEventSink, RegisterEvent, RegisterEventSink};
