//! Leaderboard printing command

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;

use scoreboard_server::db::{create_pool, Database, LeaderboardEntry, ScoreRepo, TOP_LIMIT};

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct TopArgs {
    /// Number of entries to show (1-100)
    #[arg(long, short = 'n', default_value_t = 10, value_parser = clap::value_parser!(i64).range(1..=TOP_LIMIT))]
    pub limit: i64,

    /// Output as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

#[derive(Serialize)]
struct RankedRow {
    rank: usize,
    name: String,
    score: i32,
    timestamp: DateTime<Utc>,
}

pub async fn run_top(args: TopArgs) -> Result<()> {
    let config = args.db.config()?;
    let pool = create_pool(&config)
        .await
        .context("Could not connect to database")?;
    let db = Database::pooled(pool, config.acquire_timeout);

    let mut conn = db.acquire().await.context("Could not connect to database")?;
    let result = ScoreRepo::new(&mut conn).top(args.limit).await;
    db.release(conn).await;
    db.close().await;

    let entries = result.context("Failed to read leaderboard")?;
    let rows = ranked(entries);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No scores yet.");
        return Ok(());
    }

    println!("{:>4}  {:<50}  {:>10}  {}", "#", "NAME", "SCORE", "SUBMITTED");
    for row in &rows {
        println!(
            "{:>4}  {:<50}  {:>10}  {}",
            row.rank,
            row.name,
            row.score,
            row.timestamp.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

fn ranked(entries: Vec<LeaderboardEntry>) -> Vec<RankedRow> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| RankedRow {
            rank: i + 1,
            name: e.name,
            score: e.score,
            timestamp: e.timestamp,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_start_at_one() {
        let entry = |id, score| LeaderboardEntry {
            id,
            name: format!("p{id}"),
            score,
            timestamp: Utc::now(),
        };

        let rows = ranked(vec![entry(3, 90), entry(1, 50)]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].name, "p3");
        assert_eq!(rows[1].rank, 2);
    }
}
