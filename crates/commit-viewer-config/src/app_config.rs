//! Application configuration
//!
//! Configuration loaded from `.commit-viewer.toml`.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding the configured API URL.
pub const API_URL_ENV: &str = "COMMIT_VIEWER_API_URL";

/// Application configuration loaded from `.commit-viewer.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the backend serving `/repositories/...`
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Base URL to use: command line, then environment, then this config.
    pub fn resolve_api_url(&self, cli: Option<&str>) -> String {
        let from_env = env::var(API_URL_ENV).ok();
        self.resolve_api_url_with(cli, from_env.as_deref())
    }

    fn resolve_api_url_with(&self, cli: Option<&str>, from_env: Option<&str>) -> String {
        let non_blank = |value: &&str| !value.trim().is_empty();

        if let Some(url) = cli.filter(non_blank) {
            log::debug!("Using API URL from command line: {}", url);
            return url.trim().to_string();
        }
        if let Some(url) = from_env.filter(non_blank) {
            log::debug!("Using API URL from {}: {}", API_URL_ENV, url);
            return url.trim().to_string();
        }
        self.api_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://localhost:3000");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            api_url = "https://api.example.com"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
    }

    #[test]
    fn test_config_deserialize_empty_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_rejects_wrong_type() {
        assert!(toml::from_str::<AppConfig>("api_url = 3000").is_err());
    }

    #[test]
    fn test_resolve_prefers_command_line() {
        let config = AppConfig {
            api_url: "http://file".to_string(),
        };
        assert_eq!(
            config.resolve_api_url_with(Some("http://cli"), Some("http://env")),
            "http://cli"
        );
    }

    #[test]
    fn test_resolve_falls_back_to_env_then_file() {
        let config = AppConfig {
            api_url: "http://file".to_string(),
        };
        assert_eq!(
            config.resolve_api_url_with(None, Some("http://env")),
            "http://env"
        );
        assert_eq!(config.resolve_api_url_with(None, None), "http://file");
    }

    #[test]
    fn test_resolve_ignores_blank_values() {
        let config = AppConfig::default();
        assert_eq!(
            config.resolve_api_url_with(Some("  "), Some("")),
            "http://localhost:3000"
        );
    }
}
