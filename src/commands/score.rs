//! Score command
//!
//! Scores a single guess against a given secret.

use crate::core::{Code, Feedback};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`, both written as digit strings
///
/// # Errors
///
/// Returns an error if:
/// - Either code contains something other than the digits 0-9
/// - The codes differ in length
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret: Code = secret.parse().map_err(|e| format!("Invalid secret: {e}"))?;
    let guess: Code = guess.parse().map_err(|e| format!("Invalid guess: {e}"))?;

    if secret.is_empty() {
        return Err("Secret must contain at least one peg".to_string());
    }

    let feedback = Feedback::calculate(&secret, &guess).map_err(|e| e.to_string())?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_valid_pair() {
        let result = score_codes("1122", "2211").unwrap();
        assert_eq!(result.feedback, Feedback::new(0, 4));
        assert_eq!(result.secret.to_string(), "1122");
        assert_eq!(result.guess.to_string(), "2211");
    }

    #[test]
    fn score_length_mismatch() {
        let err = score_codes("1234", "12345").err().unwrap();
        assert!(err.contains("exactly 4 pegs"));
    }

    #[test]
    fn score_invalid_digits() {
        assert!(score_codes("12x4", "1234").unwrap_err().starts_with("Invalid secret"));
        assert!(score_codes("1234", "abcd").unwrap_err().starts_with("Invalid guess"));
    }

    #[test]
    fn score_long_codes() {
        let ones = "1".repeat(300);
        let result = score_codes(&ones, &ones).unwrap();
        assert_eq!(result.feedback, Feedback::new(300, 0));
        assert!(result.feedback.is_solved(300));
    }

    #[test]
    fn score_empty_secret() {
        assert!(score_codes("", "").is_err());
    }
}
