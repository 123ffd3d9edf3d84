//! Domain Value Objects
//!
//! Immutable value types that describe a registration run.

mod bridge_kind;
mod file_path;
mod working_dir;

pub use bridge_kind::BridgeKind;
pub use file_path::{FilePath, FilePathError};
pub use working_dir::WorkingDir;
