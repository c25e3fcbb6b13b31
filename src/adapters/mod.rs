// Adapters layer: concrete implementations of the store ports.

pub mod http;
pub mod memory;

pub use http::HttpDocumentStore;
pub use memory::InMemoryStore;
