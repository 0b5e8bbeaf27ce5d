//! Repository implementations for database access
//!
//! Repositories borrow an already-acquired connection; acquiring and
//! releasing it is the caller's job.

pub mod scores;

pub use scores::{LeaderboardEntry, ScoreRepo, TOP_LIMIT};
