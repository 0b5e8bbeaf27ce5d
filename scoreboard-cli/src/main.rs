//! scoreboard CLI - leaderboard backend for a browser game
//!
//! Entry point for the `scoreboard` binary:
//! - `serve`: run the HTTP server (index page, leaderboard, score submission)
//! - `init-db`: create the leaderboard table and index, then exit
//! - `top`: print the current leaderboard

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "scoreboard",
    author,
    version,
    about = "Score submission and leaderboard server for a browser game"
)]
struct Cli {
    /// Verbose logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create the leaderboard table and index if missing
    InitDb(commands::init_db::InitDbArgs),
    /// Print the current leaderboard
    Top(commands::top::TopArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so `env = "DATABASE_URL"` args see it
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
        Commands::Top(args) => commands::run_top(args).await?,
    }
    Ok(())
}
