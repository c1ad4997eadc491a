//! Game lifecycle
//!
//! A `Session` is one game from secret generation to win or loss. `Statistics`
//! aggregate finished games, and `Game` ties a session, statistics and the
//! random source together for front ends.

mod manager;
mod session;
mod stats;

pub use manager::Game;
pub use session::{GameState, GuessOutcome, GuessRecord, Session};
pub use stats::{GameResult, RECENT_RESULTS_LIMIT, Statistics};
