//! Authorizer service configuration.
//!
//! Parsed from YAML; only the key store endpoint is mandatory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Authorizer configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Key store endpoint used to validate basic credentials.
    pub key_store: KeyStoreConfig,

    /// Header carrying a raw gateway API key (default: "x-api-key").
    #[serde(default = "defaults::api_key_header")]
    pub api_key_header: String,

    /// Log filter (default: "info").
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

/// Key store connection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStoreConfig {
    /// Base URL of the key-management API.
    pub url: String,

    /// Service token for key store authentication.
    #[serde(default)]
    pub service_token: Option<String>,

    /// Request timeout in milliseconds (default: 180).
    #[serde(default = "defaults::timeout_ms")]
    pub timeout_ms: u64,
}

impl KeyStoreConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

mod defaults {
    pub fn api_key_header() -> String {
        "x-api-key".to_string()
    }
    pub fn log_level() -> String {
        "info".to_string()
    }
    pub fn timeout_ms() -> u64 {
        180
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config =
            serde_yaml::from_str(yaml).with_context(|| "Failed to parse authorizer config YAML")?;

        // Validate
        if config.key_store.url.trim().is_empty() {
            anyhow::bail!("Config must set a key store URL");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_minimal() {
        let config = Config::from_yaml(
            r#"
            keyStore:
              url: "https://keys.example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.key_store.url, "https://keys.example.com");
        assert_eq!(config.key_store.service_token, None);
        assert_eq!(config.key_store.timeout(), Duration::from_millis(180));
        assert_eq!(config.api_key_header, "x-api-key");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_yaml_full() {
        let config = Config::from_yaml(
            r#"
            keyStore:
              url: "https://keys.example.com"
              serviceToken: "svc-token"
              timeoutMs: 500
            apiKeyHeader: "x-gateway-key"
            logLevel: "gateway_authorizer=debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.key_store.service_token.as_deref(), Some("svc-token"));
        assert_eq!(config.key_store.timeout(), Duration::from_millis(500));
        assert_eq!(config.api_key_header, "x-gateway-key");
        assert_eq!(config.log_level, "gateway_authorizer=debug");
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let result = Config::from_yaml(
            r#"
            keyStore:
              url: ""
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_key_store_is_rejected() {
        assert!(Config::from_yaml("apiKeyHeader: x-api-key").is_err());
    }
}
