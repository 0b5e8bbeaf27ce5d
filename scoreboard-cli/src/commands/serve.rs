//! HTTP server command
//!
//! Connects to the database (degrading to direct connections if the pool
//! cannot be built), makes sure the schema exists, then serves until
//! Ctrl+C/SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use scoreboard_server::db::{ensure_schema, Database};
use scoreboard_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Directory of game assets served under /static
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db.config()?;
    let db = Database::connect(&db_config).await;

    // A missing table degrades requests but must not stop startup.
    // ensure_schema logs its own failure.
    let _ = ensure_schema(&db).await;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        static_dir: args.static_dir,
    };

    run_server(db, config).await.context("Server error")?;

    Ok(())
}
