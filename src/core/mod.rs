pub mod catalog;
pub mod code;
pub mod identify;
pub mod listings;
pub mod matcher;
pub mod scorer;
pub mod search;
pub mod tokenize;

pub use crate::domain::model::{
    CanonicalModel, CatalogSummary, CollectionSummary, Identification, PriceEntry, Product,
    SearchResult, UnfilteredProduct,
};
pub use crate::domain::ports::{
    ConfigProvider, ModelStore, ProductStore, SearchField, UnfilteredStore,
};
pub use crate::utils::error::Result;
