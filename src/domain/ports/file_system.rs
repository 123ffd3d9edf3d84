//! FileSystem port - abstraction over the file checks a run performs
//!
//! The registrar only asks whether paths exist; it never reads or writes
//! file contents.

use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - mocks in tests
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}
