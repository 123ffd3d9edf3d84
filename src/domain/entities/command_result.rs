//! CommandResult entity - the outcome of one bridge invocation

/// Captured output of one external command
///
/// Produced once per opened file and consumed immediately; results from
/// different files are independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Command line as shown to the user
    pub command: String,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Whether the command exited successfully
    pub success: bool,
}

impl CommandResult {
    /// A successful result
    pub fn succeeded(command: impl Into<String>, stdout: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    /// A failed result
    pub fn failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }

    /// Trimmed stdout, or `None` when the command printed nothing
    pub fn output(&self) -> Option<&str> {
        let trimmed = self.stdout.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Trimmed stderr for display
    pub fn error_text(&self) -> &str {
        self.stderr.trim()
    }
}
