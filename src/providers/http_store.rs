//! HTTP-backed record store
//!
//! Queries a remote lookup service with `GET {base_url}/{category}?q=<text>`
//! and expects a JSON array of records in return.

use super::store::{Record, RecordStore};
use crate::error::ProviderError;
use crate::search::Category;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

const DEFAULT_USER_AGENT: &str = concat!("wander-search/", env!("CARGO_PKG_VERSION"));

/// Record store reached over HTTP
#[derive(Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    /// Create a store with the default user agent
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_user_agent(base_url, None)
    }

    pub fn with_user_agent(base_url: impl Into<String>, user_agent: Option<&str>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, category: Category) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), category)
    }
}

fn classify(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::timeout(err.to_string())
    } else if err.is_builder() || err.is_decode() {
        ProviderError::internal(err.to_string())
    } else {
        ProviderError::unavailable(err.to_string())
    }
}

#[async_trait]
impl RecordStore for HttpStore {
    fn name(&self) -> &str {
        "http"
    }

    async fn lookup(
        &self,
        category: Category,
        text: &str,
        budget: Duration,
    ) -> Result<Vec<Record>, ProviderError> {
        if budget.is_zero() {
            return Err(ProviderError::timeout("deadline already passed"));
        }

        let url = self.endpoint(category);
        debug!("Fetching {} records from {} (budget {:?})", category, url, budget);

        let response = self
            .client
            .get(&url)
            .query(&[("q", text)])
            .timeout(budget)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::unavailable(format!(
                "{} answered {}",
                url, status
            )));
        }
        if !status.is_success() {
            return Err(ProviderError::internal(format!("{} answered {}", url, status)));
        }

        response.json::<Vec<Record>>().await.map_err(classify)
    }
}
