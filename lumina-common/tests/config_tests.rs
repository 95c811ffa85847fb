//! Unit tests for configuration resolution and graceful degradation
//!
//! Covers:
//! - Missing TOML files degrade to defaults, never terminate
//! - ENV → TOML → compiled-default priority order
//! - Malformed values are ignored with the next tier applying
//!
//! Note: Uses serial_test to prevent ENV variable race conditions. Tests
//! that manipulate LUMINA_PORT or LUMINA_LOG_LEVEL are marked #[serial].

use lumina_common::config::{
    load_toml_config_from, ServiceConfig, TomlConfig, DEFAULT_LOG_LEVEL, DEFAULT_PORT,
    ENV_LOG_LEVEL, ENV_PORT,
};
use serial_test::serial;
use std::env;

#[test]
fn missing_config_file_degrades_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_toml_config_from(&dir.path().join("does-not-exist.toml"));
    assert!(config.port.is_none());
    assert!(config.gemini_api_key.is_none());
    assert!(config.logging.level.is_none());
}

#[test]
fn malformed_config_file_degrades_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lumina.toml");
    std::fs::write(&path, "port = \"not a number").unwrap();

    let config = load_toml_config_from(&path);
    assert!(config.port.is_none());
}

#[test]
fn partial_config_file_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lumina.toml");
    std::fs::write(
        &path,
        "port = 8123\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let config = load_toml_config_from(&path);
    assert_eq!(config.port, Some(8123));
    assert_eq!(config.logging.level.as_deref(), Some("debug"));
    assert!(config.gemini_api_key.is_none());
}

#[test]
fn empty_config_document_is_valid() {
    let config = TomlConfig::parse("").unwrap();
    assert!(config.port.is_none());
    assert!(config.logging.level.is_none());
}

#[test]
#[serial]
fn resolve_with_no_overrides_uses_compiled_defaults() {
    env::remove_var(ENV_PORT);
    env::remove_var(ENV_LOG_LEVEL);

    let resolved = ServiceConfig::from_toml(&TomlConfig::default());
    assert_eq!(resolved.port, DEFAULT_PORT);
    assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
#[serial]
fn env_overrides_toml_and_default() {
    env::set_var(ENV_PORT, "9999");
    env::set_var(ENV_LOG_LEVEL, "trace");

    let toml_config = TomlConfig {
        port: Some(8123),
        gemini_api_key: None,
        logging: lumina_common::config::LoggingConfig {
            level: Some("warn".to_string()),
        },
    };
    let resolved = ServiceConfig::from_toml(&toml_config);
    assert_eq!(resolved.port, 9999);
    assert_eq!(resolved.log_level, "trace");

    env::remove_var(ENV_PORT);
    env::remove_var(ENV_LOG_LEVEL);
}

#[test]
#[serial]
fn invalid_env_port_falls_back_to_toml() {
    env::set_var(ENV_PORT, "not-a-port");

    let toml_config = TomlConfig {
        port: Some(8123),
        ..Default::default()
    };
    let resolved = ServiceConfig::from_toml(&toml_config);
    assert_eq!(resolved.port, 8123);

    env::remove_var(ENV_PORT);
}

#[test]
#[serial]
fn resolve_from_platform_config_never_panics() {
    env::remove_var(ENV_PORT);
    env::remove_var(ENV_LOG_LEVEL);

    // Whatever is (or is not) on disk, resolution produces usable values
    let resolved = ServiceConfig::resolve();
    assert!(resolved.port > 0);
    assert!(!resolved.log_level.is_empty());
}

#[test]
#[serial]
fn toml_applies_when_env_is_absent() {
    env::remove_var(ENV_PORT);
    env::remove_var(ENV_LOG_LEVEL);

    let toml_config = TomlConfig {
        port: Some(8123),
        gemini_api_key: Some("key".to_string()),
        logging: lumina_common::config::LoggingConfig {
            level: Some("warn".to_string()),
        },
    };
    let resolved = ServiceConfig::from_toml(&toml_config);
    assert_eq!(resolved.port, 8123);
    assert_eq!(resolved.log_level, "warn");
}
