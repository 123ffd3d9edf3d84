//! Register Event Port
//!
//! Provides an observable interface for registration runs.
//! Console lines, NDJSON streams and test recorders all hang off this.

use std::path::PathBuf;

/// Event emitted during a registration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterEvent {
    /// Run started (working directory verified)
    Started {
        working_dir: PathBuf,
        application: String,
        file_count: usize,
    },

    /// File exists and is about to be opened
    FileAdding {
        index: usize,
        path: PathBuf,
        application: String,
    },

    /// File does not exist; skipped
    FileMissing { index: usize, path: PathBuf },

    /// Bridge command succeeded
    CommandSucceeded {
        index: usize,
        path: PathBuf,
        command: String,
        stdout: String,
    },

    /// Bridge command failed; the run continues
    CommandFailed {
        index: usize,
        path: PathBuf,
        command: String,
        stderr: String,
    },

    /// All files processed
    Completed {
        application: String,
        added_count: usize,
        missing_count: usize,
        failed_count: usize,
    },
}

/// Trait for receiving register events
///
/// Implementations can be:
/// - ConsoleEventSink: plain text lines on stdout
/// - JsonEventSink: NDJSON event stream for scripts
/// - NoopEventSink: Silent operation
pub trait RegisterEventSink {
    /// Handle a register event
    fn on_event(&self, event: RegisterEvent);
}

impl<T: RegisterEventSink + ?Sized> RegisterEventSink for &T {
    fn on_event(&self, event: RegisterEvent) {
        (**self).on_event(event)
    }
}

impl<T: RegisterEventSink + ?Sized> RegisterEventSink for Box<T> {
    fn on_event(&self, event: RegisterEvent) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RegisterEventSink for NoopEventSink {
    fn on_event(&self, _event: RegisterEvent) {
        // Do nothing
    }
}
