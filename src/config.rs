//! Configuration handling for the TUI

use crate::submit::DEFAULT_TIMEOUT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default submission endpoint
pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users";

/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV: &str = "SIGNUP_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Endpoint the form is posted to
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "signup", "signup-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolve the endpoint: environment override, then file, then default
    pub fn endpoint(&self) -> String {
        self.endpoint_with_env(std::env::var(ENDPOINT_ENV).ok())
    }

    fn endpoint_with_env(&self, env: Option<String>) -> String {
        env.filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Request timeout for submissions
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert_eq!(config.request_timeout(), DEFAULT_TIMEOUT);
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            endpoint: Some("http://localhost:8080/users".to_string()),
            request_timeout_secs: Some(5),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.endpoint,
            Some("http://localhost:8080/users".to_string())
        );
        assert_eq!(parsed.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "http://x/api", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint, Some("http://x/api".to_string()));
    }

    #[test]
    fn test_endpoint_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.endpoint_with_env(None), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_endpoint_file_over_default() {
        let config = TuiConfig {
            endpoint: Some("http://file/api".to_string()),
            ..Default::default()
        };
        assert_eq!(config.endpoint_with_env(None), "http://file/api");
    }

    #[test]
    fn test_endpoint_env_over_file() {
        let config = TuiConfig {
            endpoint: Some("http://file/api".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint_with_env(Some("http://env/api".to_string())),
            "http://env/api"
        );
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = TuiConfig::default();
        assert_eq!(
            config.endpoint_with_env(Some("  ".to_string())),
            DEFAULT_ENDPOINT
        );
    }

    #[test]
    fn test_load_returns_ok() {
        // Load should return default config when file doesn't exist
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
