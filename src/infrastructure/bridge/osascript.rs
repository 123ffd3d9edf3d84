//! osascript bridge
//!
//! Sends an AppleScript `open` to a named application. The application name
//! and the file path travel as `argv` items of the script, so paths with
//! spaces or quotes need no escaping.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{display_command, run_captured};
use crate::domain::entities::CommandResult;
use crate::domain::ports::AppBridge;

const SCRIPT: [&str; 3] = [
    "on run argv",
    "tell application (item 1 of argv) to open (item 2 of argv)",
    "end run",
];

/// Bridge that opens files through `osascript`
#[derive(Debug, Clone)]
pub struct OsascriptBridge {
    program: PathBuf,
    application: String,
}

impl OsascriptBridge {
    /// Target `application` with the `osascript` found on `PATH`
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            program: PathBuf::from("osascript"),
            application: application.into(),
        }
    }

    /// Use a different executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    fn args(&self, path: &Path) -> Vec<String> {
        let mut args = Vec::with_capacity(SCRIPT.len() * 2 + 2);
        for line in SCRIPT {
            args.push("-e".to_string());
            args.push(line.to_string());
        }
        args.push(self.application.clone());
        args.push(path.to_string_lossy().into_owned());
        args
    }
}

impl AppBridge for OsascriptBridge {
    fn name(&self) -> &'static str {
        "osascript"
    }

    fn describe(&self, path: &Path) -> String {
        display_command(&self.program, &self.args(path))
    }

    fn open(&self, path: &Path) -> CommandResult {
        let mut cmd = Command::new(&self.program);
        for line in SCRIPT {
            cmd.arg("-e").arg(line);
        }
        cmd.arg(&self.application).arg(path);
        run_captured(cmd, self.describe(path))
    }
}
