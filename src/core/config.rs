//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tictac/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::WinScan;
use crate::core::board::Mark;
use crate::core::state::DEFAULT_FIRST_MARK;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TictacConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Kept as strings so a bad value is skipped on its own instead of
/// failing the whole file.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    pub first_player: Option<String>,
    pub win_scan: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub first_player: Option<Mark>,
    pub win_scan: Option<WinScan>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "tictac.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub first_mark: Mark,
    pub win_scan: WinScan,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
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

/// Returns the path to `~/.tictac/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tictac").join("config.toml"))
}

/// Load config from `~/.tictac/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TictacConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TictacConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TictacConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<TictacConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TictacConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TictacConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# tictac configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [game]
# first_player = "O"      # "X" or "O"             (env: TICTAC_FIRST_PLAYER)
# win_scan = "scoped"     # "scoped" or "full"     (env: TICTAC_WIN_SCAN)

# [logging]
# file = "tictac.log"     #                        (env: TICTAC_LOG_FILE)
# level = "debug"         # "off" .. "trace"       (env: TICTAC_LOG_LEVEL)
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TictacConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env`.
pub fn resolve_with(
    config: &TictacConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // First player: CLI → env → config → default
    let first_mark = cli
        .first_player
        .or_else(|| parse_env(&env, "TICTAC_FIRST_PLAYER"))
        .or_else(|| parse_file(config.game.first_player.as_deref(), "game.first_player"))
        .unwrap_or(DEFAULT_FIRST_MARK);

    // Win scan: CLI → env → config → default
    let win_scan = cli
        .win_scan
        .or_else(|| parse_env(&env, "TICTAC_WIN_SCAN"))
        .or_else(|| parse_file(config.game.win_scan.as_deref(), "game.win_scan"))
        .unwrap_or_default();

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("TICTAC_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: env → config → default
    let log_level = parse_env(&env, "TICTAC_LOG_LEVEL")
        .or_else(|| parse_file(config.logging.level.as_deref(), "logging.level"))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        first_mark,
        win_scan,
        log_file,
        log_level,
    }
}

fn parse_env<T>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    env(key).and_then(|value| parse_logged(key, &value))
}

fn parse_file<T>(value: Option<&str>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.and_then(|v| parse_logged(key, v))
}

/// Parses `value`, warning and returning None when it is invalid.
fn parse_logged<T>(key: &str, value: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Ignoring {key}={value:?}: {e}");
            None
        }
    }
}
