//! Command implementations for scoreboard CLI

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use scoreboard_server::DatabaseConfig;

pub mod init_db;
pub mod serve;
pub mod top;

pub use init_db::run_init_db;
pub use serve::run_serve;
pub use top::run_top;

/// Database connection arguments shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Seconds to wait for a database connection before failing
    #[arg(long, default_value_t = 5)]
    pub acquire_timeout_secs: u64,
}

impl DatabaseArgs {
    pub fn config(&self) -> Result<DatabaseConfig> {
        let url = self
            .database_url
            .clone()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let config = DatabaseConfig::new(url).context("Invalid database URL")?;
        Ok(config.with_acquire_timeout(Duration::from_secs(self.acquire_timeout_secs)))
    }
}
