//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod player;
pub mod score;
pub mod submission;
pub mod validation;

pub use player::PlayerName;
pub use score::Score;
pub use submission::ScoreSubmission;
pub use validation::ValidationError;
