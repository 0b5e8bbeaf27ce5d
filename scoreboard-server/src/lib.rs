//! scoreboard-server: score submission and leaderboard backend
//!
//! Stores player name/score pairs in a single PostgreSQL table and serves
//! the top entries ranked by score over HTTP.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseConfig};
pub use db::{Database, DbError};
pub use http::{build_router, run_server, ServerConfig};
