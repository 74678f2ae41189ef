//! Centralized configuration management for vkloot

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for downloaded documents
    pub loot_dir: PathBuf,
    /// Path to the persisted credentials file
    pub settings_path: PathBuf,
    /// VK API base URL
    pub api_base_url: String,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "vkloot/0.1.0".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let loot_dir = std::env::var("VKLOOT_LOOT_DIR")
            .unwrap_or_else(|_| "./loot".to_string())
            .into();

        let settings_path = std::env::var("VKLOOT_SETTINGS_PATH")
            .unwrap_or_else(|_| "./settings.json".to_string())
            .into();

        let api_base_url = std::env::var("VKLOOT_API_BASE_URL")
            .unwrap_or_else(|_| crate::vk::API_BASE_URL.to_string());

        let http = HttpConfig {
            timeout_seconds: parse_env_var("VKLOOT_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("VKLOOT_USER_AGENT")
                .unwrap_or_else(|_| "vkloot/0.1.0".to_string()),
        };

        Ok(Config {
            loot_dir,
            settings_path,
            api_base_url,
            http,
        })
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Validate configuration, creating the loot directory if absent
    pub fn validate(&self) -> Result<()> {
        std::fs::create_dir_all(&self.loot_dir).with_context(|| {
            format!("Cannot create loot directory: {}", self.loot_dir.display())
        })?;
        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_env().unwrap();
        assert_eq!(config.loot_dir, PathBuf::from("./loot"));
        assert_eq!(config.settings_path, PathBuf::from("./settings.json"));
        assert_eq!(config.api_base_url, crate::vk::API_BASE_URL);
        assert_eq!(config.http.timeout_seconds, 30);
    }

    #[test]
    fn test_http_timeout_conversion() {
        let config = Config {
            loot_dir: "./loot".into(),
            settings_path: "./settings.json".into(),
            api_base_url: crate::vk::API_BASE_URL.to_string(),
            http: HttpConfig {
                timeout_seconds: 5,
                ..Default::default()
            },
        };
        assert_eq!(config.http_timeout(), Duration::from_secs(5));
    }
}
