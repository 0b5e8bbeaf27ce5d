//! Database configuration
//!
//! The connection string is only ever injected: from the environment via
//! [`DatabaseConfig::from_env`] or explicitly via [`DatabaseConfig::new`].

use std::fmt;
use std::time::Duration;

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Minimum number of live connections kept by the pool.
const DEFAULT_MIN_CONNECTIONS: u32 = 1;

/// Maximum number of connections the pool may open.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a connection before giving up.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("DATABASE_URL is empty")]
    EmptyDatabaseUrl,
}

/// Connection settings for [`crate::db::Database`]
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Build a config for the given connection string with default pool bounds.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }

        Ok(Self {
            url,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        })
    }

    /// Read the connection string from `DATABASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(DATABASE_URL_ENV).map_err(|_| ConfigError::MissingDatabaseUrl)?;
        Self::new(url)
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

// Connection strings carry credentials; keep them out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("min_connections", &self.min_connections)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}
