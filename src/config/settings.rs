use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{ErrorKind, LeetError};

/// Environment variable that overrides the stored API key
pub const API_KEY_ENV: &str = "LEETLOG_API_KEY";

const DEFAULT_MODEL: &str = "models/gemini-2.0-flash-lite";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Contents of `config.json`. Only `api_key` is written by `init`; the rest
/// fall back to defaults when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn with_api_key<S: Into<String>>(api_key: S) -> Self {
        Config {
            api_key: api_key.into(),
            ..Config::default()
        }
    }

    /// Load once per invocation. A missing file yields defaults (no key).
    pub async fn load(path: &Path) -> Result<Config, LeetError> {
        let mut config = match tokio::fs::read_to_string(path).await {
            Ok(content) => serde_json::from_str::<Config>(&content).map_err(|e| {
                LeetError::new(
                    ErrorKind::Config,
                    format!("config.json is invalid ({}); run `leetlog init` again", e),
                    "config"
                ).with_context(format!("path: {:?}", path))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = ?path, "No config file, using defaults");
                Config::default()
            }
            Err(e) => {
                return Err(LeetError::io(
                    format!("Failed to read config.json: {}", e),
                    "config"
                ).with_context(format!("path: {:?}", path)));
            }
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                tracing::debug!("Using API key from {}", API_KEY_ENV);
                config.api_key = key;
            }
        }

        Ok(config)
    }

    pub async fn save(&self, path: &Path) -> Result<(), LeetError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LeetError::parse(
                format!("Failed to serialize config: {}", e),
                "json_serialize"
            ))?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| LeetError::io(
                format!("Failed to write config.json: {}", e),
                "config"
            ).with_context(format!("path: {:?}", path)))
    }

    /// The key, if one is configured
    pub fn api_key(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty()).then_some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config: Config = serde_json::from_str(r#"{"api_key": "abc"}"#).unwrap();
        assert_eq!(config.api_key(), Some("abc"));
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_blank_key_is_absent() {
        assert_eq!(Config::with_api_key("   ").api_key(), None);
        assert_eq!(Config::default().api_key(), None);
    }
}
