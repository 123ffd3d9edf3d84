//! Register options

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::domain::value_objects::{FilePath, FilePathError, WorkingDir};

/// Default application name handed to the bridge
pub const DEFAULT_APPLICATION: &str = "Xcode";

/// A configured list entry that could not be used as a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// 1-based position in the configured list
    pub position: usize,
    pub reason: FilePathError,
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipping file list entry {}: {}", self.position, self.reason)
    }
}

/// Inputs for one registration run
#[derive(Debug, Clone)]
pub struct RegisterOptions {
    /// Directory the file list is relative to
    pub working_dir: WorkingDir,
    /// Files to open, in processing order
    pub files: Vec<FilePath>,
    /// Application name shown in output (and targeted by osascript)
    pub application: String,
    /// Entries dropped from the configured list
    pub skipped: Vec<SkippedEntry>,
}

impl RegisterOptions {
    /// Create options for a working directory and file list
    pub fn new(working_dir: WorkingDir, files: Vec<FilePath>) -> Self {
        Self {
            working_dir,
            files,
            application: DEFAULT_APPLICATION.to_string(),
            skipped: Vec::new(),
        }
    }

    /// Build options from resolved configuration
    ///
    /// A relative project directory is anchored at `cwd`. Blank entries are
    /// left out of `files` and recorded in `skipped`; the rest keep their order.
    pub fn from_config(config: &Config, cwd: &Path) -> Self {
        let mut files = Vec::with_capacity(config.project.files.len());
        let mut skipped = Vec::new();
        for (i, entry) in config.project.files.iter().enumerate() {
            match FilePath::new(entry.as_str()) {
                Ok(path) => files.push(path),
                Err(reason) => skipped.push(SkippedEntry {
                    position: i + 1,
                    reason,
                }),
            }
        }

        let working_dir = WorkingDir::new(config.project.dir.clone(), cwd);
        let mut options =
            Self::new(working_dir, files).with_application(config.bridge.application.clone());
        options.skipped = skipped;
        options
    }

    /// Set application name
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }
}
