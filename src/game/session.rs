//! Single-game state machine
//!
//! States: `InProgress` → `Won` | `Lost`. The terminal states are entered
//! exactly once; afterwards every submission is rejected without mutation.

use crate::core::{Code, Feedback, Rules};
use crate::error::GameError;
use rand::Rng;
use tracing::{debug, trace};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A submitted guess together with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Code,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub state: GameState,
}

/// One game: the secret, the attempt budget and the guess history
#[derive(Debug, Clone)]
pub struct Session {
    secret: Code,
    rules: Rules,
    attempts_remaining: u32,
    attempts_used: u32,
    history: Vec<GuessRecord>,
    state: GameState,
}

impl Session {
    /// Start a game with a secret drawn from `rng`
    pub fn start<R: Rng>(rules: Rules, rng: &mut R) -> Self {
        let secret = Code::random(rules.code_length(), rng);
        trace!(%secret, "generated secret");
        Self::from_parts(rules, secret)
    }

    /// Start a game with a known secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuessLength` if the secret's length differs
    /// from `rules.code_length()`.
    pub fn with_secret(rules: Rules, secret: Code) -> Result<Self, GameError> {
        if secret.len() != rules.code_length() {
            return Err(GameError::InvalidGuessLength {
                expected: rules.code_length(),
                actual: secret.len(),
            });
        }
        Ok(Self::from_parts(rules, secret))
    }

    fn from_parts(rules: Rules, secret: Code) -> Self {
        Self {
            secret,
            rules,
            attempts_remaining: rules.max_attempts(),
            attempts_used: 0,
            history: Vec::with_capacity(rules.max_attempts() as usize),
            state: GameState::InProgress,
        }
    }

    /// Score a guess and advance the game
    ///
    /// Checks, in order: the game is still in progress, the guess has the
    /// code length, every peg id is in the alphabet. On error nothing changes.
    ///
    /// A fully correct guess wins even on the last attempt; the loss check
    /// only applies to guesses that did not win.
    ///
    /// # Errors
    /// - `GameError::GameAlreadyOver` if the session is `Won` or `Lost`
    /// - `GameError::InvalidGuessLength` if `pegs.len()` differs from the code length
    /// - `GameError::InvalidPegValue` if any id is outside 0-9
    pub fn submit_guess(&mut self, pegs: &[u8]) -> Result<GuessOutcome, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        if pegs.len() != self.rules.code_length() {
            return Err(GameError::InvalidGuessLength {
                expected: self.rules.code_length(),
                actual: pegs.len(),
            });
        }

        let guess = Code::from_ids(pegs)?;
        let feedback = Feedback::calculate(&self.secret, &guess)?;

        self.history.push(GuessRecord { guess, feedback });
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        self.attempts_used += 1;

        self.state = if feedback.is_solved(self.rules.code_length()) {
            GameState::Won
        } else if self.attempts_remaining == 0 {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        debug!(
            attempt = self.attempts_used,
            exact = feedback.exact(),
            partial = feedback.partial(),
            state = ?self.state,
            "scored guess"
        );

        Ok(GuessOutcome {
            feedback,
            state: self.state,
        })
    }

    /// The secret code, available at any time
    ///
    /// Deciding when to show it to a player is up to the caller.
    #[must_use]
    pub const fn reveal_secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.rules.code_length()
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Guesses in submission order (oldest first)
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Guesses for display, newest first
    pub fn history_newest_first(&self) -> impl Iterator<Item = &GuessRecord> {
        self.history.iter().rev()
    }
}
