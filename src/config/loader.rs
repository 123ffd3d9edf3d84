//! Configuration loading
//!
//! Layers, lowest priority first: built-in defaults, user config,
//! project config (`./xcadd.toml` or `--config`), then `XCADD_*` variables.
//! Command-line flags are applied last by the caller.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{XcaddError, XcaddResult};

use super::defaults::PROJECT_CONFIG_FILE;
use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Environment variable that replaces the user config directory
pub const CONFIG_DIR_VAR: &str = "XCADD_CONFIG_DIR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> XcaddResult<(Config, Vec<ConfigWarning>)> {
    let (table, warnings) = read_layer(path)?;
    let config = into_config(table, path)?;
    Ok((config, warnings))
}

/// Load every config layer that exists and merge them
///
/// `explicit` (from `--config`) replaces the `./xcadd.toml` lookup and must exist.
pub fn load_layered(
    explicit: Option<&Path>,
    cwd: &Path,
) -> XcaddResult<(Config, Vec<ConfigWarning>)> {
    let mut layers: Vec<PathBuf> = Vec::new();

    if let Some(user_config) = user_config_path() {
        if user_config.is_file() {
            layers.push(user_config);
        }
    }

    match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            if !path.is_file() {
                return Err(XcaddError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            layers.push(path);
        }
        None => {
            let project_config = cwd.join(PROJECT_CONFIG_FILE);
            if project_config.is_file() {
                layers.push(project_config);
            }
        }
    }

    let mut merged = toml::Table::new();
    let mut warnings = Vec::new();
    for layer in &layers {
        let (table, layer_warnings) = read_layer(layer)?;
        merge_tables(&mut merged, table);
        warnings.extend(layer_warnings);
    }

    let origin = layers.last().cloned().unwrap_or_default();
    let config = into_config(merged, &origin)?;
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (XCADD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any variable lookup
pub fn apply_env<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // XCADD_DIR
    if let Some(dir) = var("XCADD_DIR").filter(|v| !v.is_empty()) {
        config.project.dir = PathBuf::from(dir);
    }

    // XCADD_APP
    if let Some(app) = var("XCADD_APP").filter(|v| !v.is_empty()) {
        config.bridge.application = app;
    }

    // XCADD_BRIDGE (unknown values keep the configured bridge)
    if let Some(value) = var("XCADD_BRIDGE").filter(|v| !v.is_empty()) {
        config.bridge.kind = EnvVarValidator::new("XCADD_BRIDGE", &["osascript", "xed"]).parse(
            &value,
            |s| s.parse().ok(),
            config.bridge.kind,
        );
    }

    // XCADD_BRIDGE_PROGRAM
    if let Some(program) = var("XCADD_BRIDGE_PROGRAM").filter(|v| !v.is_empty()) {
        config.bridge.program = Some(PathBuf::from(program));
    }

    // XCADD_VERBOSITY
    if let Some(value) = var("XCADD_VERBOSITY").filter(|v| !v.is_empty()) {
        config.output.verbosity =
            EnvVarValidator::new("XCADD_VERBOSITY", &["quiet", "normal", "verbose"]).parse(
                &value,
                |s| match s.to_lowercase().as_str() {
                    "quiet" => Some(Verbosity::Quiet),
                    "normal" => Some(Verbosity::Normal),
                    "verbose" => Some(Verbosity::Verbose),
                    _ => None,
                },
                config.output.verbosity,
            );
    }

    config
}

/// User config file location (`~/.config/xcadd/config.toml` or equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_VAR) {
        return Some(PathBuf::from(dir).join("config.toml"));
    }
    dirs::config_dir().map(|d| d.join("xcadd").join("config.toml"))
}

/// Read one file as a TOML table, validating it against `Config`
fn read_layer(path: &Path) -> XcaddResult<(toml::Table, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let _: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| invalid(path, e))?;

    let mut table: toml::Table = toml::from_str(&content).map_err(|e| invalid(path, e))?;
    anchor_project_dir(&mut table, path);

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((table, warnings))
}

fn into_config(table: toml::Table, origin: &Path) -> XcaddResult<Config> {
    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| invalid(origin, e))
}

fn invalid(path: &Path, err: impl fmt::Display) -> XcaddError {
    XcaddError::InvalidConfig {
        file: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// A relative `project.dir` is relative to the file that sets it
fn anchor_project_dir(table: &mut toml::Table, config_file: &Path) {
    let Some(base) = config_file.parent() else {
        return;
    };
    let dir = table
        .get_mut("project")
        .and_then(toml::Value::as_table_mut)
        .and_then(|project| project.get_mut("dir"));
    if let Some(toml::Value::String(dir)) = dir {
        if Path::new(dir.as_str()).is_relative() {
            let anchored = base.join(dir.as_str()).to_string_lossy().into_owned();
            *dir = anchored;
        }
    }
}

/// Deep-merge `overlay` into `base`; tables merge, everything else replaces
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// First line that defines `key`, as `key = ...` or a `[key]`/`[a.key]` header
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| defines_key(line.trim_start(), key))
        .map(|i| i + 1)
}

fn defines_key(line: &str, key: &str) -> bool {
    if let Some(rest) = line.strip_prefix(key) {
        return rest.trim_start().starts_with('=');
    }
    if let Some(header) = line.strip_prefix('[') {
        let name = header.split(']').next().unwrap_or_default().trim();
        return name == key || name.ends_with(&format!(".{}", key));
    }
    false
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project",
        "dir",
        "files",
        "bridge",
        "kind",
        "application",
        "program",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
