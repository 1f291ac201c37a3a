//! Persistence module - keeps the best score across sessions.
//!
//! The host consults the store at startup and when a game ends; the
//! simulation core never touches it.

pub mod best_score;
pub mod paths;

pub use best_score::BestScoreStore;
