//! Tracing setup for the scoreboard CLI
//!
//! Usage:
//!   scoreboard --debug serve               # Debug logging with targets
//!   RUST_LOG=scoreboard_server=debug ...   # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used by `--debug` when RUST_LOG is not set
const DEBUG_FILTER: &str = "info,scoreboard=debug,scoreboard_server=debug,tower_http=debug";

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (ignored if RUST_LOG is set)
    pub debug: bool,
}

/// Initialize console tracing.
///
/// RUST_LOG always wins; otherwise `info`, or [`DEBUG_FILTER`] with `--debug`.
pub fn init(config: &TracingConfig) -> Result<()> {
    let fallback = if config.debug { DEBUG_FILTER } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
