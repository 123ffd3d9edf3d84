//! Event Sink Implementations
//!
//! Provides concrete implementations of RegisterEventSink:
//! - ConsoleEventSink: plain text lines for humans
//! - JsonEventSink: NDJSON output for scripts

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
