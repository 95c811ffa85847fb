//! Configuration loading for the Lumina service
//!
//! Resolution follows a fixed priority order:
//! 1. Environment variable (highest priority)
//! 2. TOML config file (`~/.config/lumina/lumina.toml`)
//! 3. Compiled default (fallback)
//!
//! A missing or unreadable config file never terminates the service; it is
//! logged and the defaults apply.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default HTTP port for the portfolio service
pub const DEFAULT_PORT: u16 = 5850;

/// Default tracing level when nothing is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable names recognized by the service
pub const ENV_PORT: &str = "LUMINA_PORT";
pub const ENV_LOG_LEVEL: &str = "LUMINA_LOG_LEVEL";

/// Logging section of the TOML config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Tracing level: "error", "warn", "info", "debug", "trace"
    pub level: Option<String>,
}

/// On-disk configuration file schema
///
/// All fields are optional so that a partial (or empty, or absent) file is
/// always valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// HTTP port override
    pub port: Option<u16>,
    /// Gemini API key for the metadata analyzer
    pub gemini_api_key: Option<String>,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse a TOML document into a config, tolerating unknown keys
    pub fn parse(content: &str) -> crate::Result<Self> {
        toml::from_str(content)
            .map_err(|e| crate::Error::Config(format!("Parse TOML failed: {}", e)))
    }
}

/// Default configuration file path for the platform
/// (`~/.config/lumina/lumina.toml` on Linux)
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lumina").join("lumina.toml"))
}

/// Load the TOML config from an explicit path
///
/// Missing or malformed files degrade to defaults with a warning.
pub fn load_toml_config_from(path: &Path) -> TomlConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match TomlConfig::parse(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed config {}: {}", path.display(), e);
                TomlConfig::default()
            }
        },
        Err(_) => TomlConfig::default(),
    }
}

/// Load the TOML config from the platform default location
pub fn load_toml_config() -> TomlConfig {
    match config_file_path() {
        Some(path) => load_toml_config_from(&path),
        None => {
            warn!("Could not determine config directory, using defaults");
            TomlConfig::default()
        }
    }
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// HTTP port to bind
    pub port: u16,
    /// Tracing level string
    pub log_level: String,
}

impl ServiceConfig {
    /// Resolve the service configuration with ENV → TOML → default priority
    pub fn resolve() -> Self {
        Self::from_toml(&load_toml_config())
    }

    /// Resolve against an already-loaded TOML config (separable for tests)
    pub fn from_toml(toml_config: &TomlConfig) -> Self {
        let port = match std::env::var(ENV_PORT) {
            Ok(raw) => match raw.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!("Invalid {} value {:?}, ignoring", ENV_PORT, raw);
                    toml_config.port.unwrap_or(DEFAULT_PORT)
                }
            },
            Err(_) => toml_config.port.unwrap_or(DEFAULT_PORT),
        };

        let log_level = std::env::var(ENV_LOG_LEVEL)
            .ok()
            .or_else(|| toml_config.logging.level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self { port, log_level }
    }
}
