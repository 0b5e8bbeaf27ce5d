//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": ..., "code": ...}` JSON bodies.
//! Database details are logged, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request rejected before touching the database (400)
    Validation(ValidationError),

    /// No connection could be acquired (500)
    Unavailable(DbError),

    /// Leaderboard read failed (500)
    QueryFailed(DbError),

    /// Insert or commit failed, transaction rolled back (500)
    InsertFailed(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) | Self::QueryFailed(_) | Self::InsertFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.code(),
            Self::Unavailable(_) => "db_unavailable",
            Self::QueryFailed(_) => "query_failed",
            Self::InsertFailed(_) => "insert_failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match &self {
            Self::Validation(e) => e.to_string(),
            Self::Unavailable(e) => {
                tracing::error!(error = %e, "Database unavailable");
                "database unavailable, please try again later".to_string()
            }
            Self::QueryFailed(e) => {
                tracing::error!(error = %e, "Leaderboard query failed");
                "failed to load leaderboard".to_string()
            }
            Self::InsertFailed(e) => {
                tracing::error!(error = %e, "Score insert failed");
                "failed to save score".to_string()
            }
        };

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
