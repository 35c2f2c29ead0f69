//! Users provider
//!
//! Users never carry a location, so results are ranked on text alone.

use super::scoring::score_text;
use super::store::RecordStore;
use super::traits::SearchProvider;
use crate::error::ProviderError;
use crate::results::SearchResult;
use crate::search::{Category, SearchQuery};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::debug;

/// User directory search provider
pub struct UsersProvider {
    store: Arc<dyn RecordStore>,
}

impl UsersProvider {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SearchProvider for UsersProvider {
    fn name(&self) -> &str {
        "users"
    }

    fn category(&self) -> Category {
        Category::Users
    }

    async fn search(
        &self,
        query: &SearchQuery,
        deadline: Instant,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        self.check_category(query)?;

        let budget = deadline.saturating_duration_since(Instant::now());
        let records = self.store.lookup(Category::Users, &query.text, budget).await?;
        debug!("Users store returned {} candidates", records.len());

        Ok(score_text(query, records))
    }
}
