//! Register result types

use crate::domain::value_objects::FilePath;
use crate::error::XcaddError;

/// A file whose bridge command failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    /// Path as listed
    pub path: FilePath,
    /// Command line that failed
    pub command: String,
    /// Captured error text
    pub stderr: String,
}

/// Result of a registration run
#[derive(Debug, Clone, Default)]
pub struct RegisterReport {
    /// Files whose open command succeeded
    pub added: Vec<FilePath>,
    /// Files that did not exist (no command issued)
    pub missing: Vec<FilePath>,
    /// Files whose open command failed
    pub failed: Vec<FailedFile>,
}

impl RegisterReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bridge commands issued
    ///
    /// Always equals the number of listed files that existed.
    pub fn attempted(&self) -> usize {
        self.added.len() + self.failed.len()
    }

    /// Total files considered
    pub fn total_count(&self) -> usize {
        self.attempted() + self.missing.len()
    }

    /// No missing files and no failed commands
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.failed.is_empty()
    }

    /// Per-file problems, in the order missing files then failed commands
    pub fn problems(&self) -> Vec<XcaddError> {
        let missing = self.missing.iter().map(|path| XcaddError::FileMissing {
            path: path.as_path().to_path_buf(),
        });
        let failed = self.failed.iter().map(|f| XcaddError::CommandExecution {
            command: f.command.clone(),
            stderr: f.stderr.clone(),
        });
        missing.chain(failed).collect()
    }
}
