//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::BridgeKind;
use crate::error::XcaddResult;

use super::defaults::{DEFAULT_FILES, DEFAULT_PROJECT_DIR};
use super::loader::{self, ConfigWarning};

/// Project configuration: where the files live and which to open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_project_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_files")]
    pub files: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            dir: default_project_dir(),
            files: default_files(),
        }
    }
}

fn default_project_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PROJECT_DIR)
}

fn default_files() -> Vec<String> {
    DEFAULT_FILES.iter().map(|s| s.to_string()).collect()
}

/// Bridge configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub kind: BridgeKind,

    #[serde(default = "default_application")]
    pub application: String,

    /// Executable override (defaults to `osascript` / `xed` on PATH)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<PathBuf>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            kind: BridgeKind::default(),
            application: default_application(),
            program: None,
        }
    }
}

fn default_application() -> String {
    "Xcode".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub bridge: BridgeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a single TOML file (missing keys take defaults)
    pub fn load(path: &Path) -> XcaddResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> XcaddResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Layer user config, project config (or `explicit`), and environment
    pub fn load_layered(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> XcaddResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(explicit, cwd)
    }

    /// Apply environment variable overrides (XCADD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Render as TOML (for `xcadd config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
