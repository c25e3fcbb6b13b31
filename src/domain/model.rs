use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A brand/series/line template used to classify raw product names.
///
/// Identity is the full (brand, series, line) tuple. Records missing `brand`
/// or `series` can exist in the store but are skipped during matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalModel {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub line: Option<String>,
}

impl CanonicalModel {
    /// Only records with a brand and a series take part in matching.
    pub fn is_matchable(&self) -> bool {
        !self.brand.is_empty() && !self.series.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub source: String,
    pub value: String,
}

/// A classified catalog product. The core only ever reads `product_name`;
/// everything else is carried for the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub product_code: String,
    #[serde(default)]
    pub model_type: Option<CanonicalModel>,
    #[serde(default)]
    pub prices: Vec<PriceEntry>,
    #[serde(default)]
    pub image_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A raw scrape result awaiting classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnfilteredProduct {
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// A scored search hit. Produced per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub product: Product,
    pub score: u32,
}

/// Outcome of a model-bound product lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub model: CanonicalModel,
    pub product_code: String,
    pub product: Option<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_items: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub total_items: usize,
    pub items_last_24_hours: usize,
}

impl CollectionSummary {
    /// Counts items overall and those created within 24 hours of `now`.
    pub fn compute<I>(now: DateTime<Utc>, created: I) -> Self
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let cutoff = now - chrono::Duration::hours(24);
        let mut total_items = 0;
        let mut items_last_24_hours = 0;
        for ts in created {
            total_items += 1;
            if ts >= cutoff {
                items_last_24_hours += 1;
            }
        }
        Self {
            total_items,
            items_last_24_hours,
        }
    }
}
