use chrono::Utc;

use crate::domain::model::{CollectionSummary, UnfilteredProduct};
use crate::domain::ports::UnfilteredStore;
use crate::utils::error::Result;

/// Read access to pre-classification scrape results.
///
/// Store failures propagate to the caller; an empty listing always means the
/// collection really is empty.
pub struct UnfilteredListings<S: UnfilteredStore> {
    store: S,
}

impl<S: UnfilteredStore> UnfilteredListings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<UnfilteredProduct>> {
        self.store.find_all().await
    }

    pub async fn summary(&self) -> Result<CollectionSummary> {
        let listings = self.store.find_all().await?;
        Ok(CollectionSummary::compute(
            Utc::now(),
            listings.into_iter().map(|l| l.created_at),
        ))
    }
}
