//! Guess scoring
//!
//! Feedback counts exact matches (right peg, right position, "black pegs")
//! and partial matches (right peg, wrong position, "white pegs").
//!
//! Two equivalent methods are provided. `Feedback::calculate` is the classic
//! two-pass scan with consumption; `Feedback::from_counts` is the closed form
//! over per-value occurrence counts. They agree on every input.

use super::{Code, Peg};
use crate::error::GameError;
use std::fmt;

/// Score of a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Feedback {
    exact: usize,
    partial: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Score `guess` against `secret` with the two-pass algorithm
    ///
    /// # Algorithm
    /// 1. First pass: every position where guess and secret agree is an exact
    ///    match; both pegs are consumed.
    /// 2. Second pass: each unconsumed guess peg consumes the first unconsumed
    ///    secret peg of the same value (lowest index) and counts as partial.
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuessLength` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret: Code = "1234".parse().unwrap();
    /// let guess: Code = "1243".parse().unwrap();
    /// assert_eq!(Feedback::calculate(&secret, &guess).unwrap(), Feedback::new(2, 2));
    /// ```
    pub fn calculate(secret: &Code, guess: &Code) -> Result<Self, GameError> {
        check_lengths(secret, guess)?;

        let mut secret_left: Vec<Option<Peg>> = secret.pegs().iter().copied().map(Some).collect();
        let mut guess_left: Vec<Option<Peg>> = guess.pegs().iter().copied().map(Some).collect();
        let mut exact = 0;
        let mut partial = 0;

        // First pass: exact matches
        for (s, g) in secret_left.iter_mut().zip(guess_left.iter_mut()) {
            if s == g {
                exact += 1;
                *s = None;
                *g = None;
            }
        }

        // Second pass: right peg, wrong position
        for peg in guess_left.into_iter().flatten() {
            if let Some(slot) = secret_left.iter_mut().find(|slot| **slot == Some(peg)) {
                *slot = None;
                partial += 1;
            }
        }

        Ok(Self { exact, partial })
    }

    /// Score `guess` against `secret` from per-value counts
    ///
    /// For each peg value `v`, partial matches contributed by `v` are
    /// `min(count in secret, count in guess) - exact matches at v`.
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuessLength` if the codes differ in length.
    pub fn from_counts(secret: &Code, guess: &Code) -> Result<Self, GameError> {
        check_lengths(secret, guess)?;

        let mut exact_at = [0usize; Peg::ALPHABET_SIZE as usize];
        for (s, g) in secret.pegs().iter().zip(guess.pegs()) {
            if s == g {
                exact_at[s.index()] += 1;
            }
        }

        let secret_counts = secret.peg_counts();
        let guess_counts = guess.peg_counts();

        let exact = exact_at.iter().sum();
        let partial = secret_counts
            .iter()
            .zip(&guess_counts)
            .zip(&exact_at)
            .map(|((&s, &g), &e)| s.min(g) - e)
            .sum();

        Ok(Self { exact, partial })
    }

    /// Number of exact matches (black pegs)
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Number of partial matches (white pegs)
    #[inline]
    #[must_use]
    pub const fn partial(self) -> usize {
        self.partial
    }

    /// Check if every peg of a code of `code_length` is an exact match
    #[inline]
    #[must_use]
    pub const fn is_solved(self, code_length: usize) -> bool {
        self.exact == code_length
    }

    /// Positions that earned neither kind of match
    #[inline]
    #[must_use]
    pub const fn misses(self, code_length: usize) -> usize {
        code_length.saturating_sub(self.exact + self.partial)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}

fn check_lengths(secret: &Code, guess: &Code) -> Result<(), GameError> {
    if secret.len() == guess.len() {
        Ok(())
    } else {
        Err(GameError::InvalidGuessLength {
            expected: secret.len(),
            actual: guess.len(),
        })
    }
}
