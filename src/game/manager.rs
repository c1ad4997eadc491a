//! Game manager
//!
//! Owns the current session, the run's statistics and the random source.
//! Front ends hold one `Game` and route every action through it, so several
//! independent games can coexist and tests can seed the secret generator.

use super::session::{GameState, GuessOutcome, Session};
use super::stats::Statistics;
use crate::core::{Code, Difficulty};
use crate::error::GameError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// A run of consecutive games with shared statistics
#[derive(Debug)]
pub struct Game {
    rng: StdRng,
    difficulty: Difficulty,
    session: Session,
    statistics: Statistics,
}

impl Game {
    /// Create a game seeded from the operating system and start the first round
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Create a game with a reproducible secret sequence
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    /// Create a game drawing secrets from `rng`
    #[must_use]
    pub fn with_rng(difficulty: Difficulty, mut rng: StdRng) -> Self {
        let session = Session::start(difficulty.rules(), &mut rng);
        info!(%difficulty, "new game");
        Self {
            rng,
            difficulty,
            session,
            statistics: Statistics::default(),
        }
    }

    /// Start a fresh game, abandoning the current one if unfinished
    ///
    /// Abandoned games are not recorded in the statistics.
    pub fn start_game(&mut self, difficulty: Difficulty) -> &Session {
        self.log_abandoned();
        self.difficulty = difficulty;
        self.session = Session::start(difficulty.rules(), &mut self.rng);
        info!(%difficulty, "new game");
        &self.session
    }

    /// Start a fresh game with a known secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuessLength` if the secret does not fit the
    /// difficulty's code length. The current game is kept in that case.
    pub fn start_with_secret(
        &mut self,
        difficulty: Difficulty,
        secret: Code,
    ) -> Result<&Session, GameError> {
        let session = Session::with_secret(difficulty.rules(), secret)?;
        self.log_abandoned();
        self.difficulty = difficulty;
        self.session = session;
        info!(%difficulty, "new game with fixed secret");
        Ok(&self.session)
    }

    /// Submit a guess to the current session
    ///
    /// When the guess ends the game, the result is recorded in the statistics.
    /// This happens once per game since finished sessions reject submissions.
    ///
    /// # Errors
    /// Propagates `GameError` from `Session::submit_guess`.
    pub fn submit_guess(&mut self, pegs: &[u8]) -> Result<GuessOutcome, GameError> {
        let outcome = self.session.submit_guess(pegs)?;

        match outcome.state {
            GameState::Won => {
                let attempts = self.session.attempts_used();
                self.statistics.record_win(attempts);
                info!(attempts, "game won");
            }
            GameState::Lost => {
                self.statistics.record_loss();
                info!(secret = %self.session.reveal_secret(), "game lost");
            }
            GameState::InProgress => {}
        }

        Ok(outcome)
    }

    /// The current session's secret
    #[must_use]
    pub const fn reveal_secret(&self) -> &Code {
        self.session.reveal_secret()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn log_abandoned(&self) {
        if self.session.state() == GameState::InProgress && self.session.attempts_used() > 0 {
            debug!(
                attempts = self.session.attempts_used(),
                "abandoning unfinished game"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameResult;

    fn game_with_secret(secret: &str) -> Game {
        let mut game = Game::with_seed(Difficulty::Easy, 0);
        game.start_with_secret(Difficulty::Easy, secret.parse().unwrap())
            .unwrap();
        game
    }

    fn win_in(game: &mut Game, secret: &str, attempts: u32) {
        game.start_with_secret(Difficulty::Easy, secret.parse().unwrap())
            .unwrap();
        let wrong: Vec<u8> = secret
            .parse::<Code>()
            .unwrap()
            .ids()
            .iter()
            .map(|id| (id + 1) % 10)
            .collect();
        for _ in 1..attempts {
            game.submit_guess(&wrong).unwrap();
        }
        let secret_ids = game.reveal_secret().ids();
        assert_eq!(game.submit_guess(&secret_ids).unwrap().state, GameState::Won);
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let a = Game::with_seed(Difficulty::Impossible, 99);
        let b = Game::with_seed(Difficulty::Impossible, 99);
        assert_eq!(a.reveal_secret(), b.reveal_secret());
        assert_eq!(a.session().code_length(), 8);
        assert_eq!(a.session().attempts_remaining(), 15);
    }

    #[test]
    fn start_game_switches_difficulty() {
        let mut game = Game::with_seed(Difficulty::Easy, 5);
        let session = game.start_game(Difficulty::Hard);
        assert_eq!(session.code_length(), 6);
        assert_eq!(session.attempts_remaining(), 12);
        assert_eq!(game.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn win_updates_statistics() {
        let mut game = game_with_secret("1234");
        game.submit_guess(&[0, 0, 0, 0]).unwrap();
        game.submit_guess(&[1, 2, 3, 4]).unwrap();

        let stats = game.statistics();
        assert_eq!(stats.games_played(), 1);
        assert_eq!(stats.best_score(), Some(2));
        assert_eq!(
            stats.recent_results().collect::<Vec<_>>(),
            vec![GameResult::Won { attempts: 2 }]
        );
    }

    #[test]
    fn loss_updates_statistics() {
        let mut game = game_with_secret("1234");
        for _ in 0..10 {
            game.submit_guess(&[4, 3, 2, 1]).unwrap();
        }

        assert_eq!(game.session().state(), GameState::Lost);
        let stats = game.statistics();
        assert_eq!(stats.games_played(), 1);
        assert_eq!(stats.best_score(), None);
        assert_eq!(stats.recent_results().collect::<Vec<_>>(), vec![GameResult::Lost]);
    }

    #[test]
    fn best_score_survives_worse_win() {
        let mut game = Game::with_seed(Difficulty::Easy, 3);
        win_in(&mut game, "5678", 3);
        win_in(&mut game, "0011", 5);

        assert_eq!(game.statistics().best_score(), Some(3));
        assert_eq!(game.statistics().games_played(), 2);
    }

    #[test]
    fn submissions_after_game_over_are_not_recorded_twice() {
        let mut game = game_with_secret("1111");
        game.submit_guess(&[1, 1, 1, 1]).unwrap();
        assert_eq!(
            game.submit_guess(&[1, 1, 1, 1]),
            Err(GameError::GameAlreadyOver)
        );
        assert_eq!(game.statistics().games_played(), 1);
    }

    #[test]
    fn abandoned_game_is_not_counted() {
        let mut game = game_with_secret("1234");
        game.submit_guess(&[0, 0, 0, 0]).unwrap();
        game.start_game(Difficulty::Easy);

        assert_eq!(game.statistics().games_played(), 0);
        assert_eq!(game.session().attempts_used(), 0);
    }

    #[test]
    fn statistics_persist_across_games() {
        let mut game = Game::with_seed(Difficulty::Easy, 11);
        win_in(&mut game, "1234", 4);
        game.start_game(Difficulty::Hard);

        assert_eq!(game.statistics().games_played(), 1);
        assert_eq!(game.statistics().best_score(), Some(4));
    }

    #[test]
    fn bad_fixed_secret_keeps_current_game() {
        let mut game = game_with_secret("1234");
        let result = game.start_with_secret(Difficulty::Hard, "1234".parse().unwrap());

        assert!(result.is_err());
        assert_eq!(game.reveal_secret().to_string(), "1234");
        assert_eq!(game.difficulty(), Difficulty::Easy);
    }
}
