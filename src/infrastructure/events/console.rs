//! Console Event Sink
//!
//! Prints one plain line per event, in the order the run produces them.

use crate::config::Verbosity;
use crate::domain::ports::{RegisterEvent, RegisterEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that prints human-readable lines to stdout
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: Verbosity,
}

impl ConsoleEventSink {
    /// Create a console sink writing to stdout
    pub fn stdout(verbosity: Verbosity) -> Self {
        Self::with_writer(io::stdout(), verbosity)
    }

    /// Create a console sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbosity: Verbosity) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
        }
    }

    fn lines(&self, event: RegisterEvent) -> Vec<String> {
        let verbose = self.verbosity == Verbosity::Verbose;
        let quiet = self.verbosity == Verbosity::Quiet;

        match event {
            RegisterEvent::Started {
                working_dir,
                application,
                file_count,
            } if verbose => vec![format!(
                "Opening {} file(s) in {} from {}",
                file_count,
                application,
                working_dir.display()
            )],
            RegisterEvent::Started { .. } => vec![],

            RegisterEvent::FileAdding { .. } if quiet => vec![],
            RegisterEvent::FileAdding {
                path, application, ..
            } => vec![format!(
                "Adding {} to {} project...",
                path.display(),
                application
            )],

            RegisterEvent::FileMissing { path, .. } => {
                vec![format!("Warning: {} does not exist", path.display())]
            }

            RegisterEvent::CommandSucceeded {
                command, stdout, ..
            } if verbose => {
                let mut lines = vec![format!("  $ {}", command)];
                lines.extend(stdout.lines().map(|l| format!("  {}", l)));
                lines
            }
            RegisterEvent::CommandSucceeded { .. } => vec![],

            RegisterEvent::CommandFailed {
                command, stderr, ..
            } => vec![
                format!("Error running command: {}", command),
                format!("Error: {}", stderr),
            ],

            RegisterEvent::Completed { application, .. } => vec![format!(
                "Files added to {app} project. Please check {app} to confirm they appear in the navigator.",
                app = application
            )],
        }
    }
}

impl RegisterEventSink for ConsoleEventSink {
    fn on_event(&self, event: RegisterEvent) {
        let lines = self.lines(event);
        if lines.is_empty() {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            for line in lines {
                let _ = writeln!(writer, "{}", line);
            }
            let _ = writer.flush();
        }
    }
}
