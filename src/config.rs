//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// How long notifications stay visible, in milliseconds
    pub dismiss_after_ms: Option<u64>,
    /// Maximum number of concurrently shown notifications
    pub max_notifications: Option<usize>,
    /// Upper bound on how long a submission may stay in flight
    pub submit_timeout_ms: Option<u64>,
    /// Simulated backend latency, in milliseconds
    pub submit_latency_ms: Option<u64>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "kontakt", "kontakt-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::state::DEFAULT_DISMISS_AFTER)
    }

    pub fn max_notifications(&self) -> usize {
        self.max_notifications
            .unwrap_or(crate::state::DEFAULT_CAPACITY)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms.unwrap_or(10_000))
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms.unwrap_or(800))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.dismiss_after_ms.is_none());
        assert!(config.max_notifications.is_none());
        assert!(config.submit_timeout_ms.is_none());
        assert!(config.submit_latency_ms.is_none());
    }

    #[test]
    fn test_defaults_applied_by_accessors() {
        let config = AppConfig::default();
        assert_eq!(config.dismiss_after(), Duration::from_millis(5000));
        assert_eq!(config.max_notifications(), 5);
        assert_eq!(config.submit_timeout(), Duration::from_secs(10));
        assert_eq!(config.submit_latency(), Duration::from_millis(800));
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            dismiss_after_ms: Some(3000),
            max_notifications: Some(3),
            submit_timeout_ms: Some(5000),
            submit_latency_ms: Some(100),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.dismiss_after_ms, Some(3000));
        assert_eq!(parsed.max_notifications, Some(3));
        assert_eq!(parsed.submit_timeout_ms, Some(5000));
        assert_eq!(parsed.submit_latency_ms, Some(100));
    }

    #[test]
    fn test_partial_serialization() {
        let config = AppConfig {
            dismiss_after_ms: Some(2500),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.dismiss_after(), Duration::from_millis(2500));
        assert!(parsed.max_notifications.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.dismiss_after_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"dismiss_after_ms": 1000, "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.dismiss_after_ms, Some(1000));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = AppConfig::load();
        assert!(result.is_ok());
    }
}
