//! HTTP request handlers

use super::state::AppState;
use super::wire::{ErrorBody, ResultItem, SearchPayload};
use crate::error::{DispatchError, ProviderErrorKind};
use crate::search::SearchRequest;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

/// Dispatch failure rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub DispatchError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DispatchError::Validation { .. } => StatusCode::BAD_REQUEST,
            DispatchError::Upstream {
                kind: ProviderErrorKind::Timeout,
                retryable: true,
                ..
            } => StatusCode::GATEWAY_TIMEOUT,
            DispatchError::Upstream {
                retryable: true, ..
            } => StatusCode::BAD_GATEWAY,
            DispatchError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::from(&self.0))).into_response()
    }
}

/// POST /api/search
///
/// Body: `{query, type, latitude?, longitude?}`. Answers with an ordered
/// array of `{id, name, description, latitude, longitude}`.
pub async fn search(
    State(state): State<AppState>,
    Json(payload): Json<SearchPayload>,
) -> Result<Json<Vec<ResultItem>>, ApiError> {
    let request = SearchRequest::from(payload);
    debug!("Search request: {:?}", request);

    let response = state.dispatcher.dispatch(&request).await?;
    Ok(Json(response.results.into_iter().map(ResultItem::from).collect()))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "providers": state.dispatcher.registry().names(),
    }))
}
