//! Analyzer credential resolution for lumina-web
//!
//! Provides two-tier configuration resolution with ENV → TOML priority.
//! A missing key is a degraded mode (fallback-only analyzer), never a
//! startup failure.

use lumina_common::config::TomlConfig;
use tracing::{info, warn};

/// Environment variable carrying the Gemini API key
pub const ENV_GEMINI_API_KEY: &str = "LUMINA_GEMINI_API_KEY";

/// Resolve the Gemini API key from 2-tier configuration
///
/// **Priority:** ENV → TOML. Returns None when no tier provides a valid
/// (non-empty, non-whitespace) key.
pub fn resolve_gemini_api_key(toml_config: &TomlConfig) -> Option<String> {
    let env_key = std::env::var(ENV_GEMINI_API_KEY)
        .ok()
        .filter(|key| is_valid_key(key));
    let toml_key = toml_config
        .gemini_api_key
        .clone()
        .filter(|key| is_valid_key(key));

    // Warn if multiple sources (potential misconfiguration)
    if env_key.is_some() && toml_key.is_some() {
        warn!(
            "Gemini API key found in both environment and TOML config. \
             Using environment (highest priority)."
        );
    }

    if let Some(key) = env_key {
        info!("Gemini API key loaded from environment variable");
        return Some(key);
    }

    if let Some(key) = toml_key {
        info!("Gemini API key loaded from TOML config");
        return Some(key);
    }

    warn!(
        "Gemini API key not configured; uploads will receive fallback metadata. \
         Configure via {}=your-key or gemini_api_key in lumina.toml",
        ENV_GEMINI_API_KEY
    );
    None
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn key_validation_rejects_blank() {
        assert!(is_valid_key("abc123"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("   "));
        assert!(!is_valid_key("\t\n"));
    }

    #[test]
    #[serial]
    fn env_takes_priority_over_toml() {
        std::env::set_var(ENV_GEMINI_API_KEY, "env-key");
        let toml_config = TomlConfig {
            gemini_api_key: Some("toml-key".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_gemini_api_key(&toml_config).as_deref(),
            Some("env-key")
        );
        std::env::remove_var(ENV_GEMINI_API_KEY);
    }

    #[test]
    #[serial]
    fn toml_applies_when_env_absent_or_blank() {
        std::env::set_var(ENV_GEMINI_API_KEY, "   ");
        let toml_config = TomlConfig {
            gemini_api_key: Some("toml-key".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_gemini_api_key(&toml_config).as_deref(),
            Some("toml-key")
        );
        std::env::remove_var(ENV_GEMINI_API_KEY);
    }

    #[test]
    #[serial]
    fn missing_everywhere_resolves_to_none() {
        std::env::remove_var(ENV_GEMINI_API_KEY);
        assert!(resolve_gemini_api_key(&TomlConfig::default()).is_none());
    }
}
