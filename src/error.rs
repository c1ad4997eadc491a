//! Error types for guess submission
//!
//! Every failure here is a caller-input error, detected synchronously before
//! any game state changes.

use thiserror::Error;

/// Errors raised while building rules and codes or submitting guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess does not have the session's code length
    #[error("guess must have exactly {expected} pegs, got {actual}")]
    InvalidGuessLength {
        /// Code length of the session
        expected: usize,
        /// Length of the submitted guess
        actual: usize,
    },

    /// A peg id lies outside the 0-9 alphabet
    #[error("peg value {0} is outside the alphabet (0-9)")]
    InvalidPegValue(u8),

    /// Custom rules with an empty code or no attempts
    #[error("invalid rules: {code_length} pegs, {max_attempts} attempts (both must be positive)")]
    InvalidRules {
        /// Requested code length
        code_length: usize,
        /// Requested attempt budget
        max_attempts: u32,
    },

    /// The session already ended in a win or a loss
    #[error("the game is already over")]
    GameAlreadyOver,
}
