use std::collections::HashSet;

use chrono::Utc;

use crate::core::scorer::relevance_score;
use crate::domain::model::{CollectionSummary, SearchResult};
use crate::domain::ports::{ProductStore, SearchField};
use crate::utils::error::{CatalogError, Result};

/// Hard cap on ranked search output.
pub const SEARCH_LIMIT: usize = 10;
/// Hard cap on similar-item output.
pub const SIMILAR_LIMIT: usize = 4;

/// Ranks catalog products against a free-text query.
///
/// Retrieval is delegated to the store in two passes (its full-text index and
/// a regex scan of the name field); the engine merges, deduplicates, scores,
/// and orders. Every call works on a fresh store snapshot; nothing carries
/// over between calls.
pub struct SearchEngine<S: ProductStore> {
    store: S,
}

impl<S: ProductStore> SearchEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Top products for `query`, highest score first, at most [`SEARCH_LIMIT`].
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let mut results = self.retrieve_scored(query).await?;
        sort_descending(&mut results);
        results.truncate(SEARCH_LIMIT);
        Ok(results)
    }

    /// Related-but-not-identical products: the same pipeline as [`search`],
    /// minus the entire top-scoring tier, capped at [`SIMILAR_LIMIT`].
    ///
    /// When every retrieved product ties at the maximum score the result is
    /// empty.
    ///
    /// [`search`]: SearchEngine::search
    pub async fn search_similar(&self, query: &str) -> Result<Vec<SearchResult>> {
        let results = self.retrieve_scored(query).await?;

        let Some(max_score) = results.iter().map(|r| r.score).max() else {
            return Ok(Vec::new());
        };

        let mut remaining: Vec<SearchResult> = results
            .into_iter()
            .filter(|r| r.score != max_score)
            .collect();
        sort_descending(&mut remaining);
        remaining.truncate(SIMILAR_LIMIT);
        Ok(remaining)
    }

    /// Product counts, total and over the trailing 24 hours.
    pub async fn summary(&self) -> Result<CollectionSummary> {
        let products = self.store.find_all().await?;
        Ok(CollectionSummary::compute(
            Utc::now(),
            products.into_iter().map(|p| p.created_at),
        ))
    }

    /// Steps shared by `search` and `search_similar`: normalize, run both
    /// retrieval passes, dedupe with first-occurrence-wins, score.
    async fn retrieve_scored(&self, query: &str) -> Result<Vec<SearchResult>> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(CatalogError::validation("search query cannot be empty"));
        }

        let text_hits = self.store.full_text_search(&normalized).await?;
        let pattern = name_scan_pattern(&normalized);
        let regex_hits = self
            .store
            .regex_search(SearchField::ProductName, &pattern)
            .await?;
        tracing::debug!(
            text_hits = text_hits.len(),
            regex_hits = regex_hits.len(),
            "retrieval passes complete"
        );

        let mut seen = HashSet::new();
        let mut results = Vec::new();
        for product in text_hits.into_iter().chain(regex_hits) {
            if seen.insert(product.id.clone()) {
                let score = relevance_score(&product.product_name, &normalized);
                results.push(SearchResult { product, score });
            }
        }
        Ok(results)
    }
}

fn sort_descending(results: &mut [SearchResult]) {
    // sort_by is stable: ties keep their pre-sort traversal order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Glues the whitespace-split query terms into a case-insensitive
/// `.*term1.*term2.*` scan over the name field. Terms are escaped so query
/// punctuation cannot change the pattern's meaning.
pub fn name_scan_pattern(normalized_query: &str) -> String {
    let glued: Vec<String> = normalized_query
        .split_whitespace()
        .map(|term| regex::escape(term))
        .collect();
    format!("(?i).*{}.*", glued.join(".*"))
}
