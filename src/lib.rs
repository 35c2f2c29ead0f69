//! Wander Search: typed search over places, users and hazards
//!
//! A request names one category; the dispatcher validates it, hands it to
//! the provider registered for that category under a deadline, and returns
//! normalized, ranked results.

pub mod config;
pub mod error;
pub mod providers;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use error::{DispatchError, ProviderError, ProviderErrorKind, RegistryError};
pub use providers::{ProviderRegistry, SearchProvider};
pub use results::{SearchResponse, SearchResult};
pub use search::{Category, Dispatcher, SearchQuery, SearchRequest};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default provider deadline in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Default maximum number of results per response
pub const DEFAULT_PAGE_SIZE: usize = 50;
