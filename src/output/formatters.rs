//! Formatting utilities for terminal output

use super::palette::peg_color;
use crate::core::{Code, Feedback, Peg};

/// Symbol for an exact match (black peg)
pub const EXACT_SYMBOL: char = '●';
/// Symbol for a partial match (white peg)
pub const PARTIAL_SYMBOL: char = '○';
/// Symbol for a position with no match
pub const MISS_SYMBOL: char = '·';

/// Format feedback as peg symbols, exact first, then partial, then misses
#[must_use]
pub fn feedback_pegs(feedback: Feedback, code_length: usize) -> String {
    let mut result = String::with_capacity(code_length * 3);
    result.extend(std::iter::repeat_n(EXACT_SYMBOL, feedback.exact()));
    result.extend(std::iter::repeat_n(PARTIAL_SYMBOL, feedback.partial()));
    result.extend(std::iter::repeat_n(MISS_SYMBOL, feedback.misses(code_length)));
    result
}

/// Comma-separated color names, e.g. "Red, Red, Blue, Gray"
#[must_use]
pub fn color_names(code: &Code) -> String {
    code.pegs()
        .iter()
        .map(|&peg| peg_color(peg).name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Describe a code in words: digits in accessible mode, color names otherwise
#[must_use]
pub fn describe_code(code: &Code, accessible: bool) -> String {
    if accessible {
        code.to_string()
    } else {
        color_names(code)
    }
}

/// Text drawn on a peg: its id in accessible mode, blank otherwise
#[must_use]
pub fn peg_label(peg: Peg, accessible: bool) -> String {
    if accessible {
        peg.id().to_string()
    } else {
        " ".to_string()
    }
}

/// "1 attempt" / "3 attempts"
#[must_use]
pub fn attempts_phrase(count: u32) -> String {
    if count == 1 {
        "1 attempt".to_string()
    } else {
        format!("{count} attempts")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_pegs_layout() {
        assert_eq!(feedback_pegs(Feedback::new(2, 1), 4), "●●○·");
        assert_eq!(feedback_pegs(Feedback::new(0, 0), 4), "····");
        assert_eq!(feedback_pegs(Feedback::new(6, 0), 6), "●●●●●●");
    }

    #[test]
    fn describe_code_modes() {
        let code: Code = "1092".parse().unwrap();
        assert_eq!(describe_code(&code, true), "1092");
        assert_eq!(describe_code(&code, false), "Red, Gray, Brown, Orange");
    }

    #[test]
    fn peg_labels() {
        let peg = Peg::new(7).unwrap();
        assert_eq!(peg_label(peg, true), "7");
        assert_eq!(peg_label(peg, false), " ");
    }

    #[test]
    fn attempts_pluralization() {
        assert_eq!(attempts_phrase(1), "1 attempt");
        assert_eq!(attempts_phrase(0), "0 attempts");
        assert_eq!(attempts_phrase(12), "12 attempts");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
