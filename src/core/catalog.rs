use std::collections::BTreeMap;

use crate::core::matcher;
use crate::domain::model::{CanonicalModel, CatalogSummary};
use crate::domain::ports::ModelStore;
use crate::utils::error::{CatalogError, Result};

/// Read-only view over the canonical model catalog.
///
/// Fetches a full catalog snapshot per call and runs the matcher over it; the
/// store's ordering decides which of several satisfying models wins.
pub struct ModelCatalog<S: ModelStore> {
    store: S,
}

impl<S: ModelStore> ModelCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// First catalog model covered by the tokens of `product_name`, if any.
    pub async fn match_model(&self, product_name: &str) -> Result<Option<CanonicalModel>> {
        if product_name.trim().is_empty() {
            return Err(CatalogError::validation("product name cannot be empty"));
        }

        let catalog = self.store.find_all().await?;
        tracing::debug!(catalog_size = catalog.len(), "matching against catalog");
        Ok(matcher::match_model(product_name, &catalog).cloned())
    }

    /// Classifiability check for a batch of names against one catalog
    /// snapshot. Unmatchable names map to `false`, never to an error.
    pub async fn check_names(&self, names: &[String]) -> Result<BTreeMap<String, bool>> {
        let catalog = self.store.find_all().await?;
        Ok(names
            .iter()
            .map(|name| {
                let matched = matcher::match_model(name, &catalog).is_some();
                (name.clone(), matched)
            })
            .collect())
    }

    pub async fn summary(&self) -> Result<CatalogSummary> {
        let catalog = self.store.find_all().await?;
        Ok(CatalogSummary {
            total_items: catalog.len(),
        })
    }
}
