use async_trait::async_trait;
use regex::Regex;

use crate::domain::model::{CanonicalModel, Product, UnfilteredProduct};
use crate::domain::ports::{ModelStore, ProductStore, SearchField, UnfilteredStore};
use crate::utils::error::Result;

/// Store backed by owned record vectors.
///
/// Iteration order is insertion order, which makes retrieval and matching
/// deterministic in tests. The full-text pass approximates the store's
/// OR-of-terms text index: a product matches when any whitespace-split term
/// occurs, case-insensitive, in its name or a description line.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    models: Vec<CanonicalModel>,
    products: Vec<Product>,
    unfiltered: Vec<UnfilteredProduct>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_models(mut self, models: Vec<CanonicalModel>) -> Self {
        self.models = models;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_unfiltered(mut self, unfiltered: Vec<UnfilteredProduct>) -> Self {
        self.unfiltered = unfiltered;
        self
    }
}

#[async_trait]
impl ModelStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<CanonicalModel>> {
        Ok(self.models.clone())
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn full_text_search(&self, text: &str) -> Result<Vec<Product>> {
        let terms: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
        Ok(self
            .products
            .iter()
            .filter(|product| {
                let name = product.product_name.to_lowercase();
                terms.iter().any(|term| {
                    name.contains(term)
                        || product
                            .description
                            .iter()
                            .any(|line| line.to_lowercase().contains(term))
                })
            })
            .cloned()
            .collect())
    }

    async fn regex_search(&self, field: SearchField, pattern: &str) -> Result<Vec<Product>> {
        let re = Regex::new(pattern)?;
        Ok(self
            .products
            .iter()
            .filter(|product| re.is_match(field_value(product, field)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UnfilteredStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<UnfilteredProduct>> {
        Ok(self.unfiltered.clone())
    }
}

fn field_value(product: &Product, field: SearchField) -> &str {
    match field {
        SearchField::ProductName => &product.product_name,
        SearchField::ProductCode => &product.product_code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CatalogError;
    use chrono::{TimeZone, Utc};

    fn product(id: &str, name: &str, description: Vec<&str>) -> Product {
        Product {
            id: id.into(),
            product_name: name.into(),
            description: description.into_iter().map(Into::into).collect(),
            product_code: String::new(),
            model_type: None,
            prices: Vec::new(),
            image_ref: None,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn full_text_matches_any_term_in_name_or_description() {
        let store = InMemoryStore::new().with_products(vec![
            product("a", "Lenovo Legion 5", vec![]),
            product("b", "Asus ROG", vec!["16GB RAM", "legion killer"]),
            product("c", "Dell XPS", vec!["ultrabook"]),
        ]);

        let hits = store.full_text_search("legion").await.unwrap();
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn regex_search_scans_the_requested_field() {
        let mut coded = product("a", "Lenovo Legion 5", vec![]);
        coded.product_code = "82AV".into();
        let store = InMemoryStore::new()
            .with_products(vec![coded, product("b", "Asus ROG", vec![])]);

        let by_name = store
            .regex_search(SearchField::ProductName, "(?i).*rog.*")
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "b");

        let by_code = store
            .regex_search(SearchField::ProductCode, "(?i)^82av$")
            .await
            .unwrap();
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].id, "a");
    }

    #[tokio::test]
    async fn invalid_pattern_surfaces_as_pattern_error() {
        let store = InMemoryStore::new();
        let err = store
            .regex_search(SearchField::ProductName, "(unclosed")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::PatternError(_)));
    }
}
