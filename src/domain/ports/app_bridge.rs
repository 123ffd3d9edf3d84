//! AppBridge port - asks an external application to open a file
//!
//! The registrar cannot observe whether the application actually added the
//! file to its navigator; it only sees the bridge command's exit status and
//! captured output.

use std::path::Path;

use crate::domain::entities::CommandResult;

/// Capability to open an absolute path in an external application
///
/// Implementations:
/// - `OsascriptBridge` - AppleScript `open` via `osascript`
/// - `XedBridge` - Xcode's `xed` launcher
/// - mocks in tests
pub trait AppBridge {
    /// Short name for output (e.g. "osascript")
    fn name(&self) -> &'static str;

    /// Human-readable command line that `open` runs for `path`
    fn describe(&self, path: &Path) -> String;

    /// Open `path` and wait for the command to finish
    ///
    /// Failures (non-zero exit, spawn errors) are reported through
    /// `CommandResult::success`, never as a panic or error value.
    fn open(&self, path: &Path) -> CommandResult;
}

impl<T: AppBridge + ?Sized> AppBridge for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn describe(&self, path: &Path) -> String {
        (**self).describe(path)
    }

    fn open(&self, path: &Path) -> CommandResult {
        (**self).open(path)
    }
}

impl<T: AppBridge + ?Sized> AppBridge for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn describe(&self, path: &Path) -> String {
        (**self).describe(path)
    }

    fn open(&self, path: &Path) -> CommandResult {
        (**self).open(path)
    }
}
