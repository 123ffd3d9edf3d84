//! JSON Event Sink
//!
//! Outputs register events as NDJSON for scripts and CI.

use crate::domain::ports::{RegisterEvent, RegisterEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RegisterEventSink for JsonEventSink {
    fn on_event(&self, event: RegisterEvent) {
        let json = match event {
            RegisterEvent::Started {
                working_dir,
                application,
                file_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "register",
                    "working_dir": working_dir.display().to_string(),
                    "application": application,
                    "file_count": file_count,
                })
            }

            RegisterEvent::FileAdding { index, path, .. } => {
                serde_json::json!({
                    "event": "item_start",
                    "command": "register",
                    "index": index,
                    "path": path.display().to_string(),
                })
            }

            RegisterEvent::FileMissing { index, path } => {
                serde_json::json!({
                    "event": "item_missing",
                    "command": "register",
                    "index": index,
                    "path": path.display().to_string(),
                })
            }

            RegisterEvent::CommandSucceeded {
                index,
                path,
                command,
                stdout,
            } => {
                serde_json::json!({
                    "event": "item_opened",
                    "command": "register",
                    "index": index,
                    "path": path.display().to_string(),
                    "run": command,
                    "stdout": stdout,
                })
            }

            RegisterEvent::CommandFailed {
                index,
                path,
                command,
                stderr,
            } => {
                serde_json::json!({
                    "event": "item_error",
                    "command": "register",
                    "index": index,
                    "path": path.display().to_string(),
                    "run": command,
                    "error": stderr,
                })
            }

            RegisterEvent::Completed {
                application,
                added_count,
                missing_count,
                failed_count,
            } => {
                let status = if missing_count == 0 && failed_count == 0 {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "register",
                    "status": status,
                    "application": application,
                    "added": added_count,
                    "missing": missing_count,
                    "errors": failed_count,
                    "verified": false,
                })
            }
        };

        self.write_event(json);
    }
}
