//! Database connection pool management
//!
//! Uses sqlx `PgPool` with explicit bounds. When the pool cannot be built at
//! startup the [`Database`] runs in degraded mode: every acquire opens a
//! fresh connection and every release closes it.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnection, PgPoolOptions, Postgres};
use sqlx::{Connection, PgPool};

use super::DbError;
use crate::config::DatabaseConfig;

/// Create a PostgreSQL connection pool.
///
/// Opens `min_connections` eagerly, so an unreachable database fails here
/// (after `acquire_timeout`) rather than on the first request.
///
/// # Errors
///
/// Returns an error if the initial connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await
}

/// How connections are obtained
#[derive(Clone)]
pub enum PoolState {
    /// Connections come from a bounded shared pool.
    Pooled(PgPool),

    /// Pool construction failed; each acquire dials the database directly.
    Degraded { database_url: String },
}

/// Handle to the leaderboard database, shared by all request handlers.
///
/// Cheap to clone: the pooled variant shares one `PgPool`.
#[derive(Clone)]
pub struct Database {
    state: PoolState,
    acquire_timeout: Duration,
}

impl Database {
    /// Build the pool, falling back to degraded mode if that fails.
    ///
    /// Never returns an error: a missing database degrades service instead of
    /// stopping the process.
    pub async fn connect(config: &DatabaseConfig) -> Self {
        match create_pool(config).await {
            Ok(pool) => {
                tracing::info!(
                    min_connections = config.min_connections,
                    max_connections = config.max_connections,
                    "Database pool ready"
                );
                Self::pooled(pool, config.acquire_timeout)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Failed to build database pool, falling back to direct connections"
                );
                Self::degraded(config)
            }
        }
    }

    /// Wrap an existing pool.
    pub fn pooled(pool: PgPool, acquire_timeout: Duration) -> Self {
        Self {
            state: PoolState::Pooled(pool),
            acquire_timeout,
        }
    }

    /// Run without a pool, dialing per acquire.
    pub fn degraded(config: &DatabaseConfig) -> Self {
        Self {
            state: PoolState::Degraded {
                database_url: config.url.clone(),
            },
            acquire_timeout: config.acquire_timeout,
        }
    }

    pub fn state(&self) -> &PoolState {
        &self.state
    }

    /// `"pooled"` or `"degraded"`, for logs and health output.
    pub fn mode(&self) -> &'static str {
        match self.state {
            PoolState::Pooled(_) => "pooled",
            PoolState::Degraded { .. } => "degraded",
        }
    }

    /// Obtain a connection, waiting at most `acquire_timeout`.
    pub async fn acquire(&self) -> Result<DbConn, DbError> {
        match &self.state {
            PoolState::Pooled(pool) => match pool.acquire().await {
                Ok(conn) => Ok(DbConn(ConnKind::Pooled(conn))),
                Err(sqlx::Error::PoolTimedOut) => {
                    tracing::warn!(
                        timeout = ?self.acquire_timeout,
                        "Timed out acquiring pooled connection"
                    );
                    Err(DbError::Timeout(self.acquire_timeout))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to acquire pooled connection");
                    Err(DbError::Unavailable(e))
                }
            },
            PoolState::Degraded { database_url } => {
                let connect = PgConnection::connect(database_url);
                match tokio::time::timeout(self.acquire_timeout, connect).await {
                    Ok(Ok(conn)) => {
                        tracing::debug!("Opened direct connection (degraded mode)");
                        Ok(DbConn(ConnKind::Direct(conn)))
                    }
                    Ok(Err(e)) => {
                        tracing::error!(error = %e, "Failed to open direct connection");
                        Err(DbError::Unavailable(e))
                    }
                    Err(_) => {
                        tracing::warn!(
                            timeout = ?self.acquire_timeout,
                            "Timed out opening direct connection"
                        );
                        Err(DbError::Timeout(self.acquire_timeout))
                    }
                }
            }
        }
    }

    /// Give a connection back. Never fails.
    ///
    /// Pooled connections return to the pool. If the pool has been closed the
    /// connection is detached and closed directly instead. Direct connections
    /// are always closed. Close failures are logged and swallowed.
    pub async fn release(&self, conn: DbConn) {
        match conn.0 {
            ConnKind::Pooled(conn) => {
                if !self.pool_closed() {
                    drop(conn);
                    return;
                }

                tracing::warn!("Pool is closed, cannot return connection; closing it directly");
                if let Err(e) = conn.detach().close().await {
                    tracing::warn!(error = %e, "Failed to close connection detached from pool");
                }
            }
            ConnKind::Direct(conn) => {
                if let Err(e) = conn.close().await {
                    tracing::warn!(error = %e, "Failed to close direct connection");
                }
            }
        }
    }

    /// Close the pool and wait for checked-out connections to come back.
    pub async fn close(&self) {
        if let PoolState::Pooled(pool) = &self.state {
            pool.close().await;
            tracing::info!("Database pool closed");
        }
    }

    fn pool_closed(&self) -> bool {
        match &self.state {
            PoolState::Pooled(pool) => pool.is_closed(),
            PoolState::Degraded { .. } => true,
        }
    }
}

/// A connection checked out from a [`Database`].
///
/// Hand it back with [`Database::release`]. Dropping it instead (early
/// return, panic unwinding) still returns a pooled connection to the pool
/// and closes a direct one.
pub struct DbConn(ConnKind);

enum ConnKind {
    Pooled(PoolConnection<Postgres>),
    Direct(PgConnection),
}

impl DbConn {
    pub fn is_pooled(&self) -> bool {
        matches!(self.0, ConnKind::Pooled(_))
    }
}

impl Deref for DbConn {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        match &self.0 {
            ConnKind::Pooled(conn) => &**conn,
            ConnKind::Direct(conn) => conn,
        }
    }
}

impl DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut PgConnection {
        match &mut self.0 {
            ConnKind::Pooled(conn) => &mut **conn,
            ConnKind::Direct(conn) => conn,
        }
    }
}
