//! Register Use Case
//!
//! Orchestrates the batch open sequence.

use crate::domain::ports::{AppBridge, FileSystem, RegisterEvent, RegisterEventSink};
use crate::domain::services::{Planner, RegisterPlan};
use crate::error::{XcaddError, XcaddResult};

use super::options::RegisterOptions;
use super::result::{FailedFile, RegisterReport};

/// Register use case - opens every existing listed file in the application
///
/// Strictly sequential: each bridge command finishes before the next file
/// is checked.
pub struct RegisterUseCase<FS, B, E>
where
    FS: FileSystem,
    B: AppBridge,
    E: RegisterEventSink,
{
    fs: FS,
    bridge: B,
    events: E,
}

impl<FS, B, E> RegisterUseCase<FS, B, E>
where
    FS: FileSystem,
    B: AppBridge,
    E: RegisterEventSink,
{
    /// Create a new register use case
    pub fn new(fs: FS, bridge: B, events: E) -> Self {
        Self { fs, bridge, events }
    }

    /// The bridge this use case opens files with
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Classify every file without running any command
    ///
    /// Fails the same way `execute` does when the working directory is missing.
    pub fn plan(&self, options: &RegisterOptions) -> XcaddResult<RegisterPlan> {
        self.ensure_working_dir(options)?;
        Ok(Planner::plan(&options.working_dir, &options.files, &self.fs))
    }

    /// Run the batch
    ///
    /// Only a missing working directory is returned as an error, before any
    /// file is looked at. Missing files and failed commands are reported
    /// through events and collected in the report.
    pub fn execute(&self, options: &RegisterOptions) -> XcaddResult<RegisterReport> {
        self.ensure_working_dir(options)?;
        let working_dir = &options.working_dir;

        self.events.on_event(RegisterEvent::Started {
            working_dir: working_dir.as_path().to_path_buf(),
            application: options.application.clone(),
            file_count: options.files.len(),
        });

        let mut report = RegisterReport::new();

        for (index, path) in options.files.iter().enumerate() {
            let planned = Planner::plan_file(working_dir, path, &self.fs);

            if !planned.should_open() {
                self.events.on_event(RegisterEvent::FileMissing {
                    index,
                    path: path.as_path().to_path_buf(),
                });
                report.missing.push(path.clone());
                continue;
            }

            self.events.on_event(RegisterEvent::FileAdding {
                index,
                path: path.as_path().to_path_buf(),
                application: options.application.clone(),
            });

            let result = self.bridge.open(&planned.absolute);

            if result.success {
                self.events.on_event(RegisterEvent::CommandSucceeded {
                    index,
                    path: path.as_path().to_path_buf(),
                    command: result.command.clone(),
                    stdout: result.output().unwrap_or_default().to_string(),
                });
                report.added.push(path.clone());
            } else {
                let stderr = result.error_text().to_string();
                self.events.on_event(RegisterEvent::CommandFailed {
                    index,
                    path: path.as_path().to_path_buf(),
                    command: result.command.clone(),
                    stderr: stderr.clone(),
                });
                report.failed.push(FailedFile {
                    path: path.clone(),
                    command: result.command,
                    stderr,
                });
            }
        }

        self.events.on_event(RegisterEvent::Completed {
            application: options.application.clone(),
            added_count: report.added.len(),
            missing_count: report.missing.len(),
            failed_count: report.failed.len(),
        });

        Ok(report)
    }

    fn ensure_working_dir(&self, options: &RegisterOptions) -> XcaddResult<()> {
        let dir = options.working_dir.as_path();
        if self.fs.is_dir(dir) {
            Ok(())
        } else {
            Err(XcaddError::DirectoryNotFound {
                path: dir.to_path_buf(),
            })
        }
    }
}
