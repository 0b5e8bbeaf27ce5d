//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Bounded connection pool (1..=5 connections), explicitly constructed and
//!   injected; degraded to direct connections when the pool cannot be built
//! - Every acquired connection is released on every exit path
//! - Rely on DB constraints; transactions around every write

use std::time::Duration;

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, Database, DbConn, PoolState};
pub use repos::{LeaderboardEntry, ScoreRepo, TOP_LIMIT};
pub use schema::ensure_schema;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No connection could be obtained (pool broken, connection refused, bad URL)
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// Waited too long for a free connection
    #[error("timed out after {0:?} waiting for a database connection")]
    Timeout(Duration),

    /// Statement, commit, or rollback failed on an acquired connection
    #[error("database error: {0}")]
    Query(#[from] sqlx::Error),
}

impl DbError {
    /// True when the failure happened before any statement ran.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_classification() {
        assert!(DbError::Timeout(Duration::from_secs(1)).is_unavailable());
        assert!(DbError::Unavailable(sqlx::Error::PoolClosed).is_unavailable());
        assert!(!DbError::Query(sqlx::Error::RowNotFound).is_unavailable());
    }

    #[test]
    fn timeout_display() {
        let err = DbError::Timeout(Duration::from_secs(5));
        assert_eq!(
            err.to_string(),
            "timed out after 5s waiting for a database connection"
        );
    }
}
