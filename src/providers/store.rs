//! Record stores backing the providers
//!
//! A store is an opaque lookup service: it returns candidate records for a
//! category and the provider decides what matches and how it scores.

use crate::error::ProviderError;
use crate::search::{Category, Coordinates};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw record as held by a backing store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Record {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Location, only when both coordinates are present
    pub fn location(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}

/// Lookup service consulted by a provider
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store name, used for logging
    fn name(&self) -> &str;

    /// Fetch candidate records. `budget` is the time left before the
    /// caller's deadline.
    async fn lookup(
        &self,
        category: Category,
        text: &str,
        budget: Duration,
    ) -> Result<Vec<Record>, ProviderError>;
}

/// Fixed in-memory record list
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
}

impl MemoryStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn lookup(
        &self,
        _category: Category,
        _text: &str,
        _budget: Duration,
    ) -> Result<Vec<Record>, ProviderError> {
        Ok(self.records.clone())
    }
}
