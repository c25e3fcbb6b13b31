use crate::utils::error::{CatalogError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::ConfigError {
            message: format!("{field_name}: URL cannot be empty"),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::ConfigError {
                message: format!("{field_name}: unsupported URL scheme: {scheme}"),
            }),
        },
        Err(e) => Err(CatalogError::ConfigError {
            message: format!("{field_name}: invalid URL format: {e}"),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::ConfigError {
            message: format!("{field_name}: value must be at least {min_value}"),
        });
    }
    Ok(())
}

pub fn validate_non_empty_strings(field_name: &str, values: &[String]) -> Result<()> {
    for value in values {
        if value.trim().is_empty() {
            return Err(CatalogError::ConfigError {
                message: format!("{field_name}: entries cannot be empty or whitespace-only"),
            });
        }
    }
    Ok(())
}
