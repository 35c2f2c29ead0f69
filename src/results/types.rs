//! Result type definitions

use crate::search::{Category, Coordinates};
use serde::{Deserialize, Serialize};

/// A single search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Unique within its category
    pub id: String,
    /// Display name
    pub title: String,
    /// May be empty
    #[serde(default)]
    pub description: String,
    /// Only set for location-bearing categories
    #[serde(default)]
    pub location: Option<Coordinates>,
    /// Relevance score, used for ordering only
    #[serde(default)]
    pub score: f64,
}

impl SearchResult {
    /// Create a new result
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            location: None,
            score: 0.0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: Coordinates) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// A result must have a non-empty id and title and an orderable score
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty() && !self.title.is_empty() && !self.score.is_nan()
    }
}

/// Final response for one dispatched request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Echoes the request category
    pub category: Category,
    /// Descending score, ascending id on ties
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn new(category: Category, results: Vec<SearchResult>) -> Self {
        Self { category, results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
