//! Search provider module
//!
//! Defines the SearchProvider trait, the record stores providers read from,
//! and a registry mapping each category to its provider.

mod http_store;
mod loader;
mod registry;
mod scoring;
mod store;
mod traits;

// Provider implementations
pub mod hazards;
pub mod places;
pub mod users;

pub use http_store::HttpStore;
pub use loader::ProviderLoader;
pub use registry::ProviderRegistry;
pub use store::{MemoryStore, Record, RecordStore};
pub use traits::*;
