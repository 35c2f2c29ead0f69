//! Places provider
//!
//! Matches points of interest by name and description and, when the query
//! carries an origin, boosts the ones closer to it.

use super::scoring::score_located;
use super::store::RecordStore;
use super::traits::SearchProvider;
use crate::error::ProviderError;
use crate::results::SearchResult;
use crate::search::{Category, SearchQuery};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::debug;

/// Places search provider
pub struct PlacesProvider {
    store: Arc<dyn RecordStore>,
    radius_km: Option<f64>,
}

impl PlacesProvider {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            radius_km: None,
        }
    }

    /// Drop places farther than `radius_km` from the query origin
    pub fn with_radius(mut self, radius_km: Option<f64>) -> Self {
        self.radius_km = radius_km;
        self
    }
}

#[async_trait]
impl SearchProvider for PlacesProvider {
    fn name(&self) -> &str {
        "places"
    }

    fn category(&self) -> Category {
        Category::Places
    }

    async fn search(
        &self,
        query: &SearchQuery,
        deadline: Instant,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        self.check_category(query)?;

        let budget = deadline.saturating_duration_since(Instant::now());
        let records = self.store.lookup(Category::Places, &query.text, budget).await?;
        debug!(
            "Places store {} returned {} candidates",
            self.store.name(),
            records.len()
        );

        Ok(score_located(query, records, self.radius_km))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorKind;
    use crate::providers::{MemoryStore, Record};
    use crate::search::Coordinates;
    use std::time::Duration;

    fn provider() -> PlacesProvider {
        PlacesProvider::new(Arc::new(MemoryStore::new(vec![
            Record::new("1", "Central Park")
                .with_description("Popular park in NYC")
                .with_location(40.7829, -73.9654),
            Record::new("2", "Times Square")
                .with_description("Famous intersection")
                .with_location(40.7580, -73.9855),
        ])))
    }

    fn deadline() -> Instant {
        Instant::now() + Duration::from_secs(1)
    }

    #[tokio::test]
    async fn test_text_match() {
        let results = provider()
            .search(&SearchQuery::new("park", Category::Places), deadline())
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Central Park");
        assert!(results[0].location.is_some());
    }

    #[tokio::test]
    async fn test_proximity_prefers_nearest() {
        let query = SearchQuery::new("", Category::Places)
            .with_origin(Coordinates::new(40.7585, -73.9850));
        let mut results = provider().search(&query, deadline()).await.unwrap();
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        assert_eq!(results[0].title, "Times Square");
    }

    #[tokio::test]
    async fn test_rejects_other_category() {
        let err = provider()
            .search(&SearchQuery::new("park", Category::Hazards), deadline())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::InvalidCategory);
    }
}
