//! Pegs and codes
//!
//! A Peg is an id in the fixed 10-symbol alphabet; a Code is an ordered
//! sequence of pegs. Secrets and guesses are both Codes.

use crate::error::GameError;
use rand::Rng;
use std::fmt;

/// A single peg, identified by its id (0-9)
///
/// Display colors are a presentation concern; see `output::palette`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Peg(u8);

impl Peg {
    /// Number of distinct peg ids
    pub const ALPHABET_SIZE: u8 = 10;

    /// Create a peg from its id
    ///
    /// # Errors
    /// Returns `GameError::InvalidPegValue` if `id` is outside 0-9.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Peg;
    ///
    /// assert_eq!(Peg::new(7).unwrap().id(), 7);
    /// assert!(Peg::new(10).is_err());
    /// ```
    pub const fn new(id: u8) -> Result<Self, GameError> {
        if id < Self::ALPHABET_SIZE {
            Ok(Self(id))
        } else {
            Err(GameError::InvalidPegValue(id))
        }
    }

    /// Get the raw peg id (0-9)
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Iterate over every peg in the alphabet, in id order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::ALPHABET_SIZE).map(Self)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of pegs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<Peg>);

impl Code {
    /// Build a code from already-validated pegs
    #[must_use]
    pub const fn new(pegs: Vec<Peg>) -> Self {
        Self(pegs)
    }

    /// Build a code from raw peg ids
    ///
    /// # Errors
    /// Returns `GameError::InvalidPegValue` for the first id outside 0-9.
    pub fn from_ids(ids: &[u8]) -> Result<Self, GameError> {
        ids.iter()
            .map(|&id| Peg::new(id))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Draw a code of `length` independently uniform pegs
    ///
    /// Repeats are allowed. The random source is supplied by the caller so
    /// that seeded generators give reproducible secrets.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let pegs = (0..length)
            .map(|_| Peg(rng.random_range(0..Peg::ALPHABET_SIZE)))
            .collect();
        Self(pegs)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the pegs in order
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.0
    }

    /// Get the raw peg ids in order
    #[must_use]
    pub fn ids(&self) -> Vec<u8> {
        self.0.iter().map(|peg| peg.id()).collect()
    }

    /// Occurrences of each peg id, indexed by id
    pub(crate) fn peg_counts(&self) -> [usize; Peg::ALPHABET_SIZE as usize] {
        let mut counts = [0usize; Peg::ALPHABET_SIZE as usize];
        for peg in &self.0 {
            counts[peg.index()] += 1;
        }
        counts
    }
}

impl std::str::FromStr for Code {
    type Err = String;

    /// Parse a code written as digits, e.g. "1122"
    ///
    /// Surrounding whitespace is ignored; anything other than 0-9 is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .map(|ch| {
                ch.to_digit(10)
                    .map(|digit| Peg(digit as u8))
                    .ok_or_else(|| format!("Invalid peg '{ch}' in code: {s}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.0 {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn peg_bounds() {
        assert!(Peg::new(0).is_ok());
        assert!(Peg::new(9).is_ok());
        assert_eq!(Peg::new(10), Err(GameError::InvalidPegValue(10)));
        assert_eq!(Peg::new(255), Err(GameError::InvalidPegValue(255)));
    }

    #[test]
    fn peg_all_covers_alphabet() {
        let ids: Vec<u8> = Peg::all().map(Peg::id).collect();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn code_from_ids_rejects_first_bad_peg() {
        assert_eq!(Code::from_ids(&[1, 2, 11, 42]), Err(GameError::InvalidPegValue(11)));
        assert_eq!(Code::from_ids(&[1, 2, 3]).unwrap().ids(), vec![1, 2, 3]);
    }

    #[test]
    fn code_parse_and_display() {
        let code: Code = "1122".parse().unwrap();
        assert_eq!(code.ids(), vec![1, 1, 2, 2]);
        assert_eq!(code.to_string(), "1122");

        let padded: Code = "  0907 \n".parse().unwrap();
        assert_eq!(padded.to_string(), "0907");
    }

    #[test]
    fn code_parse_invalid() {
        assert!("12a4".parse::<Code>().is_err());
        assert!("12 4".parse::<Code>().is_err());
        assert!("-123".parse::<Code>().is_err());
    }

    #[test]
    fn code_peg_counts() {
        let code: Code = "90099".parse().unwrap();
        let counts = code.peg_counts();
        assert_eq!(counts[9], 3);
        assert_eq!(counts[0], 2);
        assert_eq!(counts.iter().sum::<usize>(), 5);
    }

    #[test]
    fn random_code_is_reproducible_with_seed() {
        let first = Code::random(8, &mut StdRng::seed_from_u64(42));
        let second = Code::random(8, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
        assert!(first.pegs().iter().all(|peg| peg.id() < Peg::ALPHABET_SIZE));
    }

    #[test]
    fn random_codes_cover_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 10];
        for _ in 0..200 {
            for peg in Code::random(4, &mut rng).pegs() {
                seen[peg.index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
