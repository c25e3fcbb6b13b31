use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_strings, validate_positive_number, validate_url, Validate,
};

/// File-based settings, for deployments where flags are impractical.
///
/// ```toml
/// [store]
/// endpoint = "http://store.internal:8080"
/// timeout_seconds = 10
///
/// [matching]
/// noise_keywords = ["gaming", "laptop", "bundle"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: StoreConfig,
    pub matching: Option<MatchingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub noise_keywords: Option<Vec<String>>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&raw).map_err(|e| CatalogError::ConfigError {
            message: format!("invalid settings file: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn store_endpoint(&self) -> &str {
        &self.store.endpoint
    }

    fn noise_keywords(&self) -> &[String] {
        self.matching
            .as_ref()
            .and_then(|m| m.noise_keywords.as_deref())
            .unwrap_or(&[])
    }

    fn request_timeout_secs(&self) -> u64 {
        self.store
            .timeout_seconds
            .unwrap_or(super::DEFAULT_TIMEOUT_SECS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("store.endpoint", &self.store.endpoint)?;
        validate_positive_number(
            "store.timeout_seconds",
            self.request_timeout_secs(),
            1,
        )?;
        if let Some(keywords) = self.matching.as_ref().and_then(|m| m.noise_keywords.as_ref()) {
            validate_non_empty_strings("matching.noise_keywords", keywords)?;
        }
        Ok(())
    }
}
