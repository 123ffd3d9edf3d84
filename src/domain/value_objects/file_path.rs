//! File Path Value Object
//!
//! A path from the registration list, resolved against the working directory
//! when the run reaches it. Absolute entries resolve to themselves.

use std::fmt;
use std::path::{Path, PathBuf};

/// Error when a file path cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePathError {
    /// Path is empty or only whitespace
    Empty,
}

impl fmt::Display for FilePathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilePathError::Empty => write!(f, "path is empty"),
        }
    }
}

impl std::error::Error for FilePathError {}

/// A file path from the registration list
///
/// Order in the list is significant; the path itself never changes once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath(PathBuf);

impl FilePath {
    /// Validate and wrap a list entry
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, FilePathError> {
        let path = path.into();
        if path.to_string_lossy().trim().is_empty() {
            return Err(FilePathError::Empty);
        }
        Ok(Self(path))
    }

    /// Borrow as a `Path`
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Resolve against an anchor directory (absolute paths are kept as is)
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
