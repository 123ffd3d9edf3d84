//! Command handlers for the xcadd binary

pub mod config;
pub mod plan;
pub mod register;

use std::path::{Path, PathBuf};

use anyhow::Result;
use xcadd::application::register::DEFAULT_APPLICATION;
use xcadd::{BridgeKind, Config, RegisterOptions, Verbosity};

use crate::cli::{Cli, RunArgs};

/// Flags every command shares
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub quiet: bool,
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            verbose: cli.verbose,
            quiet: cli.quiet,
            config: cli.config.clone(),
        }
    }
}

/// Load layered config, then apply command-line flags on top
///
/// Config warnings go to stderr so they never mix with NDJSON on stdout.
pub fn resolve_config(global: &GlobalArgs, run: &RunArgs, cwd: &Path) -> Result<Config> {
    let (config, warnings) = Config::load_layered(global.config.as_deref(), cwd)?;
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }
    let config = apply_flags(config, global, run);
    if let Some(warning) = bridge_warning(&config) {
        eprintln!("Warning: {}", warning);
    }
    Ok(config)
}

/// Build run options, reporting unusable list entries on stderr
pub fn register_options(config: &Config, cwd: &Path) -> RegisterOptions {
    let options = RegisterOptions::from_config(config, cwd);
    for skipped in &options.skipped {
        eprintln!("Warning: {}", skipped);
    }
    options
}

/// `xed` always opens files in the selected Xcode, whatever `application` says
fn bridge_warning(config: &Config) -> Option<String> {
    let application = &config.bridge.application;
    (config.bridge.kind == BridgeKind::Xed && application != DEFAULT_APPLICATION).then(|| {
        format!(
            "the xed bridge ignores application '{}' and opens files in the selected Xcode (see xcode-select)",
            application
        )
    })
}

fn apply_flags(mut config: Config, global: &GlobalArgs, run: &RunArgs) -> Config {
    if let Some(dir) = &run.dir {
        config.project.dir = dir.clone();
    }
    if let Some(app) = &run.app {
        config.bridge.application = app.clone();
    }
    if let Some(kind) = run.bridge {
        config.bridge.kind = kind;
    }
    if !run.files.is_empty() {
        config.project.files = run.files.clone();
    }
    if global.quiet {
        config.output.verbosity = Verbosity::Quiet;
    } else if global.verbose > 0 {
        config.output.verbosity = Verbosity::Verbose;
    }
    config
}
