use clap::{Parser, Subcommand};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_strings, validate_positive_number, validate_url, Validate,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-search")]
#[command(about = "Product identification and search for a price-comparison catalog")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8080")]
    pub store_endpoint: String,

    /// TOML settings file; replaces the connection flags when present
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, value_delimiter = ',')]
    pub noise_keywords: Vec<String>,

    #[arg(long, default_value_t = super::DEFAULT_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines instead of the compact console format")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rank catalog products against a query
    Search { query: String },
    /// Related-but-not-identical products for a query
    Similar { query: String },
    /// Resolve a raw product name to a model and residual code
    Identify { name: String },
    /// Show the first catalog model covered by a product name
    Match { name: String },
    /// Item counts per collection
    Summary,
}

impl ConfigProvider for CliConfig {
    fn store_endpoint(&self) -> &str {
        &self.store_endpoint
    }

    fn noise_keywords(&self) -> &[String] {
        &self.noise_keywords
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("store_endpoint", &self.store_endpoint)?;
        validate_positive_number("request_timeout_secs", self.request_timeout_secs, 1)?;
        validate_non_empty_strings("noise_keywords", &self.noise_keywords)?;
        Ok(())
    }
}
