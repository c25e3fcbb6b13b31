pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use adapters::{HttpDocumentStore, InMemoryStore};
pub use config::TomlConfig;
pub use core::{
    catalog::ModelCatalog, code::CodeExtractor, identify::ProductIdentifier,
    listings::UnfilteredListings, search::SearchEngine,
};
pub use utils::error::{CatalogError, Result};
