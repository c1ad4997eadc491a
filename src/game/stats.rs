//! Cross-game statistics
//!
//! Updated only when a game ends. Abandoned games are never recorded.

use std::collections::VecDeque;
use std::fmt;

/// Maximum number of recent results kept
pub const RECENT_RESULTS_LIMIT: usize = 5;

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Won { attempts: u32 },
    Lost,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won { attempts } => write!(f, "{attempts}"),
            Self::Lost => f.write_str("Lost"),
        }
    }
}

/// Totals across every finished game of a run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    games_played: u32,
    games_won: u32,
    best_score: Option<u32>,
    recent_results: VecDeque<GameResult>,
}

impl Statistics {
    /// Record a win that took `attempts` guesses
    ///
    /// The best score is the fewest attempts of any win.
    pub fn record_win(&mut self, attempts: u32) {
        self.games_played += 1;
        self.games_won += 1;
        if self.best_score.is_none_or(|best| attempts < best) {
            self.best_score = Some(attempts);
        }
        self.push_recent(GameResult::Won { attempts });
    }

    /// Record a loss; the best score is untouched
    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.push_recent(GameResult::Lost);
    }

    fn push_recent(&mut self, result: GameResult) {
        self.recent_results.push_front(result);
        self.recent_results.truncate(RECENT_RESULTS_LIMIT);
    }

    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub const fn games_won(&self) -> u32 {
        self.games_won
    }

    /// Fewest attempts needed to win, if any game was won
    #[must_use]
    pub const fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    /// Win rate as a percentage (0 when no games were played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }

    /// Up to five most recent results, most recent first
    pub fn recent_results(&self) -> impl Iterator<Item = GameResult> + '_ {
        self.recent_results.iter().copied()
    }
}
