//! Register Use Case
//!
//! Drives a batch "open file" run against an external application.
//!
//! This module handles:
//! - Verifying the working directory before anything else
//! - Checking each listed file, in order
//! - Asking the bridge to open every file that exists
//! - Reporting missing files and failed commands without stopping the run

mod options;
mod result;
mod use_case;


pub use options::{RegisterOptions, SkippedEntry, DEFAULT_APPLICATION};
pub use result::{FailedFile, RegisterReport};
pub use use_case::RegisterUseCase;
