//! Leaderboard endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{LeaderboardEntry, ScoreRepo, TOP_LIMIT};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// One leaderboard row as sent to the game
#[derive(Debug, Serialize)]
pub struct RankedScore {
    pub name: String,
    pub score: i32,
}

impl From<LeaderboardEntry> for RankedScore {
    fn from(e: LeaderboardEntry) -> Self {
        Self {
            name: e.name,
            score: e.score,
        }
    }
}

/// GET /leaderboard_data - top 100 scores, highest first
async fn leaderboard_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RankedScore>>, ApiError> {
    let db = &state.db;
    let mut conn = db.acquire().await.map_err(ApiError::Unavailable)?;

    let result = ScoreRepo::new(&mut conn).top(TOP_LIMIT).await;
    db.release(conn).await;

    let entries = result.map_err(ApiError::QueryFailed)?;
    tracing::debug!(count = entries.len(), "Leaderboard served");

    Ok(Json(entries.into_iter().map(RankedScore::from).collect()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/leaderboard_data", get(leaderboard_data))
}
