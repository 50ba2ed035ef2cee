//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file
//! and are deserialized directly.

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend API settings
    pub api: FileApiConfig,
    /// Interface settings
    pub ui: FileUiConfig,
    /// Catalog settings
    pub catalog: FileCatalogConfig,
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the backend, without the `/api` suffix
    pub base_url: String,
    /// Model name forwarded with every advisor question
    pub model: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            model: "gemini-2.5-pro".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUiConfig {
    /// Seconds between automatic suggested-question rotations
    pub question_rotation_secs: u64,
}

impl Default for FileUiConfig {
    fn default() -> Self {
        Self {
            question_rotation_secs: 3,
        }
    }
}

/// Catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Start from the bundled sample catalog before the backend answers
    pub use_fallback: bool,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self { use_fallback: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.model, "gemini-2.5-pro");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ui.question_rotation_secs, 3);
        assert!(config.catalog.use_fallback);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://poliscope.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://poliscope.example.com");
        assert_eq!(config.api.model, "gemini-2.5-pro");
        assert_eq!(config.ui.question_rotation_secs, 3);
    }
}
