//! Score submission endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Serialize;

use crate::db::ScoreRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::ScoreSubmission;

/// Submit acknowledgment
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

/// POST /submit_score - append a score to the leaderboard
///
/// Anyone may submit any name and score; there is no authentication.
async fn submit_score(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let submission = ScoreSubmission::from_json(&body)?;

    let db = &state.db;
    let mut conn = db.acquire().await.map_err(ApiError::Unavailable)?;

    let result = ScoreRepo::new(&mut conn).insert(&submission).await;
    db.release(conn).await;

    let entry = result.map_err(ApiError::InsertFailed)?;
    tracing::info!(
        id = entry.id,
        name = %entry.name,
        score = entry.score,
        "Score accepted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            message: "Score submitted".to_string(),
        }),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/submit_score", post(submit_score))
}
