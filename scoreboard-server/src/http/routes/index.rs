//! Game page

use std::sync::Arc;

use axum::{response::Html, routing::get, Router};

use crate::http::server::AppState;

/// Leaderboard page with a submit form. Game assets, if any, go under `/static`.
const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}
