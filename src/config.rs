//! Configuration handling for the TUI

use crate::store::DEFAULT_RECENT_LIMIT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Name of the log file in the data directory
pub const LOG_FILE_NAME: &str = "form-generator-tui.log";

/// Platform directories of the application
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "formgenerator", "form-generator-tui")
}

/// Log file location; the terminal itself belongs to the UI
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Page opened at startup
    pub start_path: Option<String>,
    /// Storage file location, overriding the platform data directory
    pub storage_path: Option<PathBuf>,
    /// Number of submissions listed on the home page
    pub recent_limit: Option<usize>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
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

    pub fn start_path(&self) -> &str {
        self.start_path.as_deref().unwrap_or("/")
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit.unwrap_or(DEFAULT_RECENT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.start_path.is_none());
        assert!(config.storage_path.is_none());
        assert!(config.recent_limit.is_none());
        assert_eq!(config.start_path(), "/");
        assert_eq!(config.recent_limit(), DEFAULT_RECENT_LIMIT);
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            start_path: Some("/contact".to_string()),
            storage_path: Some(PathBuf::from("/tmp/storage.json")),
            recent_limit: Some(5),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.start_path, Some("/contact".to_string()));
        assert_eq!(parsed.storage_path, Some(PathBuf::from("/tmp/storage.json")));
        assert_eq!(parsed.recent_limit(), 5);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.start_path.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"start_path": "/profile", "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.start_path(), "/profile");
    }

    #[test]
    fn test_config_path_is_json_file() {
        if let Some(path) = AppConfig::config_path() {
            assert_eq!(path.file_name().unwrap(), "config.json");
        }
    }

    #[test]
    fn test_log_file_is_in_data_dir() {
        if let (Some(path), Some(dirs)) = (log_path(), project_dirs()) {
            assert_eq!(path.parent().unwrap(), dirs.data_dir());
            assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
        }
    }
}
