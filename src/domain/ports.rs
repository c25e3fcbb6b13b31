use crate::domain::model::{CanonicalModel, Product, UnfilteredProduct};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Product fields the store can run regex scans against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    ProductName,
    ProductCode,
}

impl SearchField {
    /// Field name as stored in the document store.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::ProductName => "productName",
            SearchField::ProductCode => "productCode",
        }
    }
}

#[async_trait]
pub trait ModelStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<CanonicalModel>>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>>;

    /// Full-text retrieval pass, delegated to the store's own index.
    async fn full_text_search(&self, text: &str) -> Result<Vec<Product>>;

    /// Regex retrieval pass over a single field.
    async fn regex_search(&self, field: SearchField, pattern: &str) -> Result<Vec<Product>>;

    /// First product matching the pattern, if any.
    async fn find_one(&self, field: SearchField, pattern: &str) -> Result<Option<Product>> {
        Ok(self.regex_search(field, pattern).await?.into_iter().next())
    }
}

#[async_trait]
pub trait UnfilteredStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<UnfilteredProduct>>;
}

pub trait ConfigProvider: Send + Sync {
    fn store_endpoint(&self) -> &str;
    fn noise_keywords(&self) -> &[String];
    fn request_timeout_secs(&self) -> u64;
}
