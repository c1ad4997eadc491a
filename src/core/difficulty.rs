//! Difficulty presets
//!
//! Each difficulty maps to a fixed code length and attempt budget through a
//! lookup table indexed by the enum discriminant.

use crate::error::GameError;
use std::fmt;

/// Code length and attempt budget for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    code_length: usize,
    max_attempts: u32,
}

impl Rules {
    /// Create custom rules
    ///
    /// # Errors
    /// Returns `GameError::InvalidRules` if either value is zero.
    pub const fn new(code_length: usize, max_attempts: u32) -> Result<Self, GameError> {
        if code_length == 0 || max_attempts == 0 {
            return Err(GameError::InvalidRules {
                code_length,
                max_attempts,
            });
        }
        Ok(Self::preset(code_length, max_attempts))
    }

    const fn preset(code_length: usize, max_attempts: u32) -> Self {
        Self {
            code_length,
            max_attempts,
        }
    }

    /// Number of pegs in the secret and in every guess
    #[inline]
    #[must_use]
    pub const fn code_length(self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(self) -> u32 {
        self.max_attempts
    }
}

/// Preset difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
    Impossible,
}

// Indexed by `Difficulty as usize`
const RULES: [Rules; 3] = [
    Rules::preset(4, 10),
    Rules::preset(6, 12),
    Rules::preset(8, 15),
];

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Hard, Self::Impossible];

    /// Look up the code length and attempt budget
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Difficulty;
    ///
    /// let rules = Difficulty::Hard.rules();
    /// assert_eq!((rules.code_length(), rules.max_attempts()), (6, 12));
    /// ```
    #[must_use]
    pub const fn rules(self) -> Rules {
        RULES[self as usize]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
            Self::Impossible => "impossible",
        }
    }

    /// The next difficulty, wrapping from impossible back to easy
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Hard => Self::Impossible,
            Self::Impossible => Self::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown difficulty '{s}' (expected easy, hard or impossible)"))
    }
}
