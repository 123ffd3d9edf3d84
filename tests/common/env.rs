//! Test environment for isolated xcadd runs.
//!
//! Provides `TestEnv` - a temp project directory and a temp user config
//! directory, plus helpers to run the xcadd binary against them. No IDE is
//! needed: the bridge executable is swapped for `true`, `false`, or a path
//! that does not exist.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the xcadd CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Lines of stdout that start with `prefix`
    pub fn lines_starting_with(&self, prefix: &str) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|line| line.starts_with(prefix))
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory standing in for the user config dir
    pub config_dir: TempDir,
    xcadd_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_dir: TempDir::new().expect("Failed to create config dir"),
            xcadd_bin: PathBuf::from(env!("CARGO_BIN_EXE_xcadd")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write the user-level config.toml
    pub fn write_user_config(&self, content: &str) {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write user config");
    }

    /// Run xcadd from the project root with `program` as the bridge executable
    ///
    /// `XCADD_DIR` points at the project root, so the built-in project
    /// directory never leaks into a test.
    pub fn run(&self, program: &str, args: &[&str]) -> TestResult {
        let mut cmd = self.command(self.project_root.path(), program, args);
        cmd.env("XCADD_DIR", self.project_root.path());
        output_to_result(cmd.output().expect("Failed to execute xcadd"))
    }

    /// Like `run`, but let config files decide the project directory
    pub fn run_with_config_dir(&self, program: &str, args: &[&str]) -> TestResult {
        let mut cmd = self.command(self.project_root.path(), program, args);
        output_to_result(cmd.output().expect("Failed to execute xcadd"))
    }

    fn command(&self, cwd: &Path, program: &str, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.xcadd_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("XCADD_CONFIG_DIR", self.config_dir.path())
            .env("XCADD_BRIDGE_PROGRAM", program)
            .env_remove("XCADD_DIR")
            .env_remove("XCADD_APP")
            .env_remove("XCADD_BRIDGE")
            .env_remove("XCADD_VERBOSITY");
        cmd
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
