//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.backstack/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::LogLevel;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackstackConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub show_stack_panel: Option<bool>,
    pub poll_interval_ms: Option<u64>,
    pub toast_duration_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigationConfig {
    pub launch_single_top: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "backstack.log";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2000;

/// Accepted range for `ui.poll_interval_ms`.
pub const POLL_INTERVAL_RANGE_MS: (u64, u64) = (10, 5_000);
/// Accepted range for `ui.toast_duration_ms`.
pub const TOAST_DURATION_RANGE_MS: (u64, u64) = (100, 60_000);

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    pub show_stack_panel: bool,
    pub poll_interval_ms: u64,
    pub toast_duration_ms: u64,
    pub launch_single_top: bool,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<LogLevel>,
    pub hide_stack: bool,
    pub single_top: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.backstack/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".backstack").join("config.toml"))
}

/// Load config from `~/.backstack/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BackstackConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BackstackConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BackstackConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path, generating a default if it is missing.
pub fn load_config_from(path: &Path) -> Result<BackstackConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(BackstackConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BackstackConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Backstack Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "backstack.log"         # Or set BACKSTACK_LOG_FILE env var

# [ui]
# show_stack_panel = true
# poll_interval_ms = 250
# toast_duration_ms = 2000

# [navigation]
# launch_single_top = false          # Reuse the top screen when opening the same kind
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &BackstackConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| parse_env_log_level(std::env::var("BACKSTACK_LOG_LEVEL").ok()))
        .or(config.general.log_level)
        .unwrap_or_default();

    // Log file: env → config → default
    let log_file = std::env::var("BACKSTACK_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Flags can only switch these on (or the panel off), never back.
    let show_stack_panel = !cli.hide_stack && config.ui.show_stack_panel.unwrap_or(true);
    let launch_single_top = cli.single_top || config.navigation.launch_single_top.unwrap_or(false);

    ResolvedConfig {
        log_level,
        log_file: PathBuf::from(log_file),
        show_stack_panel,
        poll_interval_ms: clamp_ms(
            "ui.poll_interval_ms",
            config.ui.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS),
            POLL_INTERVAL_RANGE_MS,
        ),
        toast_duration_ms: clamp_ms(
            "ui.toast_duration_ms",
            config.ui.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
            TOAST_DURATION_RANGE_MS,
        ),
        launch_single_top,
    }
}

/// Parse a `BACKSTACK_LOG_LEVEL` value. Unknown names are ignored with a warning.
fn parse_env_log_level(value: Option<String>) -> Option<LogLevel> {
    let value = value?;
    let level = LogLevel::from_name(&value);
    if level.is_none() {
        warn!("Ignoring invalid BACKSTACK_LOG_LEVEL {:?}", value);
    }
    level
}

fn clamp_ms(name: &str, value: u64, (min, max): (u64, u64)) -> u64 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{} = {} is out of range, using {}", name, value, clamped);
    }
    clamped
}
