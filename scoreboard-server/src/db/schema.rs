//! Leaderboard schema
//!
//! Idempotent; safe to run on every startup.

use sqlx::postgres::PgConnection;
use sqlx::Connection;

use super::{Database, DbError};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS leaderboard (
        id SERIAL PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        score INTEGER NOT NULL CHECK (score >= 0),
        "timestamp" TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_SCORE_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_leaderboard_score
    ON leaderboard (score DESC)
"#;

/// Ensure the leaderboard table and its score index exist.
///
/// Runs in one transaction. The connection is released whether or not the
/// statements succeed.
pub async fn ensure_schema(db: &Database) -> Result<(), DbError> {
    let mut conn = db.acquire().await?;
    let result = create_objects(&mut conn).await;
    db.release(conn).await;

    match &result {
        Ok(()) => tracing::info!("Leaderboard schema ready"),
        Err(e) => tracing::error!(error = %e, "Failed to initialize leaderboard schema"),
    }
    result
}

async fn create_objects(conn: &mut PgConnection) -> Result<(), DbError> {
    let mut tx = conn.begin().await?;

    match apply(&mut tx).await {
        Ok(()) => {
            tx.commit().await?;
            Ok(())
        }
        Err(e) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(error = %rollback, "Rollback after failed schema init also failed");
            }
            Err(e.into())
        }
    }
}

async fn apply(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TABLE).execute(&mut *conn).await?;
    sqlx::query(CREATE_SCORE_INDEX).execute(&mut *conn).await?;
    Ok(())
}
