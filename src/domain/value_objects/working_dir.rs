//! Working Directory Value Object

use std::fmt;
use std::path::{Path, PathBuf};

/// The directory every `FilePath` is resolved against
///
/// Set once when the run starts and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDir(PathBuf);

impl WorkingDir {
    /// Wrap a directory path
    ///
    /// Relative values are anchored at `base` (normally the process's
    /// current directory) so the run only ever works with absolute paths.
    pub fn new(path: impl Into<PathBuf>, base: &Path) -> Self {
        let path = path.into();
        if path.is_absolute() {
            Self(path)
        } else {
            Self(base.join(path))
        }
    }

    /// Borrow as a `Path`
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for WorkingDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for WorkingDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
