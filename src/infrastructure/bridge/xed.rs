//! xed bridge
//!
//! Xcode ships `xed`, which opens files in the running Xcode instance.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{display_command, run_captured};
use crate::domain::entities::CommandResult;
use crate::domain::ports::AppBridge;

/// Bridge that opens files through `xed`
#[derive(Debug, Clone)]
pub struct XedBridge {
    program: PathBuf,
}

impl XedBridge {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("xed"),
        }
    }

    /// Use a different executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for XedBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBridge for XedBridge {
    fn name(&self) -> &'static str {
        "xed"
    }

    fn describe(&self, path: &Path) -> String {
        display_command(&self.program, &[path.as_os_str()])
    }

    fn open(&self, path: &Path) -> CommandResult {
        let mut cmd = Command::new(&self.program);
        cmd.arg(path);
        run_captured(cmd, self.describe(path))
    }
}
