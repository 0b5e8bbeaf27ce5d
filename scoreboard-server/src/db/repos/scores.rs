//! Leaderboard repository
//!
//! Append-only: rows are inserted and read, never updated or deleted.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgConnection;
use sqlx::{Connection, FromRow};

use crate::db::DbError;
use crate::models::ScoreSubmission;

/// Number of entries served by the leaderboard.
pub const TOP_LIMIT: i64 = 100;

/// Leaderboard row from database
#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardEntry {
    pub id: i32,
    pub name: String,
    pub score: i32,
    pub timestamp: DateTime<Utc>,
}

/// Leaderboard repository
pub struct ScoreRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> ScoreRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// Highest scores first, at most `limit` rows.
    ///
    /// Equal scores are ordered by id, so the earliest submission ranks first.
    pub async fn top(&mut self, limit: i64) -> Result<Vec<LeaderboardEntry>, DbError> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT id, name, score, "timestamp"
            FROM leaderboard
            ORDER BY score DESC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit.clamp(0, TOP_LIMIT))
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(entries)
    }

    /// Insert a validated submission in its own transaction.
    ///
    /// Rolls back explicitly if the insert fails; a rollback failure is
    /// logged and the original error is returned.
    pub async fn insert(&mut self, submission: &ScoreSubmission) -> Result<LeaderboardEntry, DbError> {
        let mut tx = self.conn.begin().await?;

        let inserted = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            INSERT INTO leaderboard (name, score)
            VALUES ($1, $2)
            RETURNING id, name, score, "timestamp"
            "#,
        )
        .bind(submission.name.as_str())
        .bind(submission.score.get())
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(entry) => {
                tx.commit().await?;
                Ok(entry)
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!(error = %rollback, "Rollback after failed insert also failed");
                }
                Err(e.into())
            }
        }
    }
}
