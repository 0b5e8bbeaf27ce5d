//! Schema initialization command

use anyhow::{Context, Result};
use clap::Parser;

use scoreboard_server::db::{create_pool, ensure_schema, Database};

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the leaderboard table and index. Unlike `serve`, failure is an error
/// and there is no degraded fallback.
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let config = args.db.config()?;
    let pool = create_pool(&config)
        .await
        .context("Failed to initialize leaderboard schema")?;
    let db = Database::pooled(pool, config.acquire_timeout);

    let result = ensure_schema(&db).await;
    db.close().await;
    result.context("Failed to initialize leaderboard schema")?;

    println!("Leaderboard schema ready");
    Ok(())
}
