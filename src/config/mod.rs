//! Configuration module for xcadd
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (XCADD_*)
//! 3. Project config (./xcadd.toml, or --config)
//! 4. User config (~/.config/xcadd/config.toml)
//! 5. Built-in defaults (lowest priority)

mod defaults;
mod env_validator;
mod loader;
mod types;

pub use defaults::{DEFAULT_FILES, DEFAULT_PROJECT_DIR, PROJECT_CONFIG_FILE};
pub use loader::{apply_env, user_config_path, ConfigWarning, CONFIG_DIR_VAR};
pub use types::{BridgeConfig, Config, OutputConfig, ProjectConfig, Verbosity};
