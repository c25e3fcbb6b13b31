use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::model::{CanonicalModel, Product, UnfilteredProduct};
use crate::domain::ports::{ModelStore, ProductStore, SearchField, UnfilteredStore};
use crate::utils::error::Result;

/// Client for the document-store gateway's read endpoints.
///
/// The gateway serves JSON collections under `/api`; full-text and regex
/// product search run store-side, this client only carries the query across.
/// Non-2xx responses become errors, never silently empty results. No retry
/// logic lives here; callers own that policy.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    client: Client,
    base_url: String,
}

impl HttpDocumentStore {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "document store request");

        let response = self.client.get(&url).query(query).send().await?;
        Ok(response.error_for_status()?.json::<T>().await?)
    }
}

#[async_trait]
impl ModelStore for HttpDocumentStore {
    async fn find_all(&self) -> Result<Vec<CanonicalModel>> {
        self.get_json("/api/models", &[]).await
    }
}

#[async_trait]
impl ProductStore for HttpDocumentStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        self.get_json("/api/products", &[]).await
    }

    async fn full_text_search(&self, text: &str) -> Result<Vec<Product>> {
        self.get_json("/api/products/search/text", &[("q", text)])
            .await
    }

    async fn regex_search(&self, field: SearchField, pattern: &str) -> Result<Vec<Product>> {
        self.get_json(
            "/api/products/search/regex",
            &[("field", field.as_str()), ("pattern", pattern)],
        )
        .await
    }
}

#[async_trait]
impl UnfilteredStore for HttpDocumentStore {
    async fn find_all(&self) -> Result<Vec<UnfilteredProduct>> {
        self.get_json("/api/unfiltered-products", &[]).await
    }
}
