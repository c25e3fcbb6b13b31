use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Store request failed: {0}")]
    StoreError(#[from] reqwest::Error),

    #[error("Invalid search pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("{what} not found: {key}")]
    NotFound { what: String, key: String },
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::ValidationError {
            message: message.into(),
        }
    }

    pub fn not_found(what: impl Into<String>, key: impl Into<String>) -> Self {
        CatalogError::NotFound {
            what: what.into(),
            key: key.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
