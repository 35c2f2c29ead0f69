//! JSON wire types of the search endpoint

use crate::error::DispatchError;
use crate::results::SearchResult;
use crate::search::SearchRequest;
use serde::{Deserialize, Serialize};

/// Request body for POST /api/search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPayload {
    #[serde(default)]
    pub query: Option<String>,
    /// One of "places", "users", "hazards"; anything else is passed on
    /// unchanged so validation reports it
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl From<SearchPayload> for SearchRequest {
    fn from(payload: SearchPayload) -> Self {
        Self {
            text: payload.query.unwrap_or_default(),
            category: payload.kind.unwrap_or_default(),
            latitude: payload.latitude,
            longitude: payload.longitude,
        }
    }
}

/// One entry of the response array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<SearchResult> for ResultItem {
    fn from(result: SearchResult) -> Self {
        Self {
            id: result.id,
            name: result.title,
            description: result.description,
            latitude: result.location.map(|l| l.latitude),
            longitude: result.location.map(|l| l.longitude),
        }
    }
}

/// Error body returned for failed searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ErrorBody {
    Validation {
        field: String,
        reason: String,
    },
    Upstream {
        retryable: bool,
        reason: String,
    },
}

impl From<&DispatchError> for ErrorBody {
    fn from(err: &DispatchError) -> Self {
        match err {
            DispatchError::Validation { field, reason } => Self::Validation {
                field: field.to_string(),
                reason: reason.clone(),
            },
            DispatchError::Upstream {
                retryable, reason, ..
            } => Self::Upstream {
                retryable: *retryable,
                reason: reason.clone(),
            },
        }
    }
}
