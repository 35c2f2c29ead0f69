//! Hazards provider
//!
//! With an origin, closer hazards rank higher and anything outside a
//! configured radius is dropped.

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

/// Road hazard search provider
pub struct HazardsProvider {
    store: Arc<dyn RecordStore>,
    radius_km: Option<f64>,
}

impl HazardsProvider {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            radius_km: None,
        }
    }

    /// Drop records farther than `radius_km` from the origin
    pub fn with_radius(mut self, radius_km: Option<f64>) -> Self {
        self.radius_km = radius_km;
        self
    }
}

#[async_trait]
impl SearchProvider for HazardsProvider {
    fn name(&self) -> &str {
        "hazards"
    }

    fn category(&self) -> Category {
        Category::Hazards
    }

    async fn search(
        &self,
        query: &SearchQuery,
        deadline: Instant,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        self.check_category(query)?;

        let budget = deadline.saturating_duration_since(Instant::now());
        let records = self
            .store
            .lookup(Category::Hazards, &query.text, budget)
            .await?;
        debug!("Hazards store returned {} candidates", records.len());

        Ok(score_located(query, records, self.radius_km))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorKind;
    use crate::providers::{MemoryStore, Record, RecordStore};
    use crate::search::Coordinates;
    use std::time::Duration;

    fn records() -> Vec<Record> {
        vec![
            Record::new("1", "Construction Zone")
                .with_description("Road construction ahead")
                .with_location(40.7829, -73.9654),
            Record::new("2", "Traffic Jam")
                .with_description("Heavy traffic on route")
                .with_location(40.7580, -73.9855),
            Record::new("3", "Flooded Underpass")
                .with_description("Closed after heavy rain")
                .with_location(42.3601, -71.0589),
        ]
    }

    fn deadline() -> Instant {
        Instant::now() + Duration::from_secs(1)
    }

    #[tokio::test]
    async fn test_radius_applies_with_origin() {
        let provider =
            HazardsProvider::new(Arc::new(MemoryStore::new(records()))).with_radius(Some(50.0));
        let query = SearchQuery::new("", Category::Hazards)
            .with_origin(Coordinates::new(40.7700, -73.9700));

        let results = provider.search(&query, deadline()).await.unwrap();
        let mut ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_no_radius_keeps_distant_hazards() {
        let provider = HazardsProvider::new(Arc::new(MemoryStore::new(records())));
        let query = SearchQuery::new("", Category::Hazards)
            .with_origin(Coordinates::new(40.7700, -73.9700));

        let results = provider.search(&query, deadline()).await.unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().any(|r| r.id == "3"));
    }

    #[tokio::test]
    async fn test_no_origin_returns_all_matches() {
        let provider = HazardsProvider::new(Arc::new(MemoryStore::new(records())));
        let results = provider
            .search(&SearchQuery::new("heavy", Category::Hazards), deadline())
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
    }

    struct DownStore;

    #[async_trait]
    impl RecordStore for DownStore {
        fn name(&self) -> &str {
            "down"
        }

        async fn lookup(
            &self,
            _category: Category,
            _text: &str,
            _budget: Duration,
        ) -> Result<Vec<Record>, ProviderError> {
            Err(ProviderError::unavailable("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let provider = HazardsProvider::new(Arc::new(DownStore));
        let err = provider
            .search(&SearchQuery::new("jam", Category::Hazards), deadline())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::Unavailable);
    }
}
