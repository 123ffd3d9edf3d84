//! Error types for xcadd
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for xcadd operations
pub type XcaddResult<T> = Result<T, XcaddError>;

/// Main error type for xcadd operations
#[derive(Error, Debug)]
pub enum XcaddError {
    /// The working directory does not exist (aborts the whole run)
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A listed file does not exist under the working directory
    #[error("{path} does not exist")]
    FileMissing { path: PathBuf },

    /// The bridge command exited non-zero or could not be started
    #[error("command failed: {command}: {stderr}")]
    CommandExecution { command: String, stderr: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
