//! Search dispatch: validation, provider invocation and normalization

use super::models::{Category, Coordinates, ParseCategoryError, SearchQuery, SearchRequest};
use crate::config::SearchSettings;
use crate::error::{DispatchError, ProviderError};
use crate::providers::ProviderRegistry;
use crate::results::{normalize, rank_and_truncate, SearchResponse};
use crate::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_MS};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

const DEFAULT_MAX_QUERY_LENGTH: usize = 256;

/// Dispatches one request to the provider for its category.
///
/// The dispatcher never retries. Upstream errors carry a `retryable` flag so
/// an outer layer can decide.
pub struct Dispatcher {
    /// Provider registry
    registry: Arc<ProviderRegistry>,
    /// Deadline for a single provider call
    timeout: Duration,
    /// Maximum number of results per response
    page_size: usize,
    /// Maximum query length in characters
    max_query_length: usize,
}

impl Dispatcher {
    /// Create a new dispatcher with default limits
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self {
            registry,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            page_size: DEFAULT_PAGE_SIZE,
            max_query_length: DEFAULT_MAX_QUERY_LENGTH,
        }
    }

    /// Create a dispatcher with the limits from settings
    pub fn from_settings(registry: Arc<ProviderRegistry>, settings: &SearchSettings) -> Self {
        Self::new(registry)
            .with_timeout(settings.timeout())
            .with_page_size(settings.page_size)
            .with_max_query_length(settings.max_query_length)
    }

    /// Set provider deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_max_query_length(mut self, max_query_length: usize) -> Self {
        self.max_query_length = max_query_length;
        self
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Turn a raw request into a validated query.
    ///
    /// Any origin on a category that is not location aware is discarded once
    /// it has passed validation.
    pub fn validate(&self, request: &SearchRequest) -> Result<SearchQuery, DispatchError> {
        let category: Category = request
            .category
            .parse()
            .map_err(|e: ParseCategoryError| {
                DispatchError::validation("type", e.to_string())
            })?;

        let origin = match (request.latitude, request.longitude) {
            (None, None) => None,
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => {
                return Err(DispatchError::validation(
                    "location",
                    "latitude and longitude must be given together",
                ))
            }
        };

        if let Some(origin) = origin {
            if !origin.latitude_in_range() {
                return Err(DispatchError::validation(
                    "latitude",
                    format!("{} is outside [-90, 90]", origin.latitude),
                ));
            }
            if !origin.longitude_in_range() {
                return Err(DispatchError::validation(
                    "longitude",
                    format!("{} is outside [-180, 180]", origin.longitude),
                ));
            }
        }

        let length = request.text.chars().count();
        if length > self.max_query_length {
            return Err(DispatchError::validation(
                "query",
                format!(
                    "query is {} characters long (max {})",
                    length, self.max_query_length
                ),
            ));
        }

        let query = SearchQuery::new(request.text.clone(), category);
        Ok(match origin {
            Some(origin) if category.is_location_aware() => query.with_origin(origin),
            _ => query,
        })
    }

    /// Validate, resolve, invoke and normalize
    pub async fn dispatch(&self, request: &SearchRequest) -> Result<SearchResponse, DispatchError> {
        let span = info_span!(
            "dispatch",
            request_id = %Uuid::new_v4(),
            category = %request.category
        );
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: &SearchRequest) -> Result<SearchResponse, DispatchError> {
        let query = self.validate(request).map_err(|e| {
            debug!("Rejected search request: {}", e);
            e
        })?;
        let provider = self.registry.resolve(query.category)?;
        let name = provider.name().to_string();

        let start = Instant::now();
        let deadline = start + self.timeout;
        debug!("Searching provider {} with timeout {:?}", name, self.timeout);

        // Dropping the provider future on expiry also cancels it.
        let raw = match timeout_at(deadline, provider.search(&query, deadline)).await {
            Ok(Ok(results)) => results,
            Ok(Err(e)) => {
                warn!("Provider {} failed: {}", name, e);
                return Err(e.into());
            }
            Err(_) => {
                warn!("Timeout for provider {}", name);
                return Err(ProviderError::timeout(format!(
                    "{} did not answer within {:?}",
                    name, self.timeout
                ))
                .into());
            }
        };

        let candidates = raw.len();
        let results = rank_and_truncate(normalize(raw, &name), self.page_size);

        info!(
            "Search '{}' on {} returned {} results ({} candidates) in {:?}",
            query.text,
            name,
            results.len(),
            candidates,
            start.elapsed()
        );

        Ok(SearchResponse::new(query.category, results))
    }
}
