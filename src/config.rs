//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the auth client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Email persisted when logging in with "Remember me" set
    pub remembered_email: Option<String>,
    /// Override for the branding title shown above the card
    pub app_title: Option<String>,
}

impl AuthConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "ascendion", "authflow-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AuthConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert!(config.remembered_email.is_none());
        assert!(config.app_title.is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = AuthConfig {
            remembered_email: Some("user@example.com".to_string()),
            app_title: Some("Ascendion Suite".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AuthConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.remembered_email, Some("user@example.com".to_string()));
        assert_eq!(parsed.app_title, Some("Ascendion Suite".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AuthConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.remembered_email.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"remembered_email": "user@example.com", "unknown_field": "value"}"#;
        let parsed: AuthConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.remembered_email, Some("user@example.com".to_string()));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = AuthConfig::config_path();
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = AuthConfig::load();
        assert!(result.is_ok());
    }
}
