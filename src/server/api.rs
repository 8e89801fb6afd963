//! REST API routes and handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorCategory};
use crate::service::AnalyzeRequest;

use super::AppState;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub category: &'static str,
}

impl ErrorResponse {
    fn from_error(err: &Error) -> (StatusCode, Json<Self>) {
        let status = match err.category() {
            ErrorCategory::BadInput => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Upstream => StatusCode::BAD_GATEWAY,
            ErrorCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal details stay in the logs, not on the wire
        let message = match err.category() {
            ErrorCategory::Internal => {
                tracing::error!(error = %err, "request failed");
                "failed to process request".to_string()
            }
            _ => err.to_string(),
        };

        (
            status,
            Json(Self {
                error: message,
                category: err.category().as_str(),
            }),
        )
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Query parameters for history listings
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    #[serde(default)]
    pub query: Option<String>,

    #[serde(default)]
    pub limit: Option<usize>,
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/analyze", post(analyze))
        .route("/api/analyses", get(list_analyses))
        .route("/api/analyses/{id}", get(get_analysis))
        .route("/api/trending", get(trending))
        .with_state(state)
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// Run an analysis for a search query
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> axum::response::Response {
    match state.service.analyze(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => ErrorResponse::from_error(&e).into_response(),
    }
}

/// List past analyses
async fn list_analyses(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> axum::response::Response {
    match state.service.history(params.query, params.limit).await {
        Ok(summaries) => (StatusCode::OK, Json(summaries)).into_response(),
        Err(e) => ErrorResponse::from_error(&e).into_response(),
    }
}

/// Fetch one stored analysis by id
async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match state.service.get_analysis(&id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("analysis not found: {id}"),
                category: ErrorCategory::NotFound.as_str(),
            }),
        )
            .into_response(),
        Err(e) => ErrorResponse::from_error(&e).into_response(),
    }
}

/// Trending topics over the trailing week
async fn trending(State(state): State<AppState>) -> axum::response::Response {
    match state.service.trending().await {
        Ok(topics) => (StatusCode::OK, Json(topics)).into_response(),
        Err(e) => ErrorResponse::from_error(&e).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_input_maps_to_400() {
        let err = Error::invalid_input("search query is required");
        let (status, body) = ErrorResponse::from_error(&err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.0.error.contains("query"));
        assert_eq!(body.0.category, "bad_input");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = Error::NoArticles {
            query: "obscure".to_string(),
        };
        let (status, _) = ErrorResponse::from_error(&err);
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_maps_to_502() {
        let err = Error::AllProvidersFailed {
            primary: "x".to_string(),
            fallback: "y".to_string(),
        };
        let (status, _) = ErrorResponse::from_error(&err);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_internal_errors_are_opaque() {
        let err = Error::EmptyAggregate;
        let (status, body) = ErrorResponse::from_error(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error, "failed to process request");
    }
}
