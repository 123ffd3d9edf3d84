//! Application Bridge Implementations
//!
//! Concrete implementations of the AppBridge port. Every bridge runs one
//! child process per file, passes the path as its own argument (never
//! through a shell), and waits for it to exit.

mod osascript;
mod xed;

pub use osascript::OsascriptBridge;
pub use xed::XedBridge;

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::entities::CommandResult;
use crate::domain::ports::AppBridge;
use crate::domain::value_objects::BridgeKind;

/// Build the bridge selected in configuration
///
/// `program` overrides the executable (e.g. an absolute path to `osascript`).
pub fn create_bridge(
    kind: BridgeKind,
    application: &str,
    program: Option<&Path>,
) -> Box<dyn AppBridge> {
    match kind {
        BridgeKind::Osascript => {
            let bridge = OsascriptBridge::new(application);
            Box::new(match program {
                Some(p) => bridge.with_program(p),
                None => bridge,
            })
        }
        BridgeKind::Xed => {
            let bridge = XedBridge::new();
            Box::new(match program {
                Some(p) => bridge.with_program(p),
                None => bridge,
            })
        }
    }
}

/// Quote an argument for display, the way a shell would need it
pub(crate) fn shell_quote<S: AsRef<OsStr>>(arg: S) -> String {
    let s = arg.as_ref().to_string_lossy();
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '-' | '_' | ':' | '='));
    if plain {
        s.into_owned()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

/// Render a program and its arguments as one display line
pub(crate) fn display_command<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> String {
    std::iter::once(shell_quote(program.as_os_str()))
        .chain(args.iter().map(shell_quote))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a command to completion and capture its output
///
/// Spawn failures become a failed result whose stderr names the program.
pub(crate) fn run_captured(mut cmd: Command, display: String) -> CommandResult {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let output = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            if output.status.success() {
                CommandResult::succeeded(display, stdout)
            } else {
                let stderr = if stderr.trim().is_empty() {
                    format!("{} exited with code: {:?}", program, output.status.code())
                } else {
                    stderr
                };
                CommandResult {
                    command: display,
                    stdout,
                    stderr,
                    success: false,
                }
            }
        }
        Err(e) => CommandResult::failed(display, format!("failed to run {}: {}", program, e)),
    }
}
