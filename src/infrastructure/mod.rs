//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system checks (Local)
//! - `bridge/` - Application bridges (osascript, xed)
//! - `events/` - Event sinks (console text, NDJSON)

pub mod bridge;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use bridge::{create_bridge, OsascriptBridge, XedBridge};
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
