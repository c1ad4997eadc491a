//! Display functions for game state and command results

use super::formatters::{attempts_phrase, create_progress_bar, describe_code, feedback_pegs};
use super::palette::{peg_color, wants_light_label};
use crate::commands::{AnalysisResult, ScoreResult};
use crate::core::{Code, Peg};
use crate::game::{GameState, Session, Statistics};
use colored::{ColoredString, Colorize};

/// Render one peg in its color, with its id on top in accessible mode
#[must_use]
pub fn colored_peg(peg: Peg, accessible: bool) -> ColoredString {
    let (r, g, b) = peg_color(peg).rgb;
    if accessible {
        let label = format!(" {} ", peg.id());
        let label = if wants_light_label(peg) {
            label.white()
        } else {
            label.black()
        };
        label.on_truecolor(r, g, b).bold()
    } else {
        "●".truecolor(r, g, b)
    }
}

/// Render a whole code as colored pegs
#[must_use]
pub fn colored_code(code: &Code, accessible: bool) -> String {
    code.pegs()
        .iter()
        .map(|&peg| colored_peg(peg, accessible).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per guess, newest first
#[must_use]
pub fn history_lines(session: &Session, accessible: bool) -> Vec<String> {
    let total = session.history().len();
    session
        .history_newest_first()
        .enumerate()
        .map(|(i, record)| {
            format!(
                "  {:>2}. {}   {}",
                (total - i).to_string().bright_black(),
                colored_code(record.guess(), accessible),
                feedback_pegs(record.feedback(), session.code_length()).bold()
            )
        })
        .collect()
}

/// Summary lines for the run's statistics
#[must_use]
pub fn statistics_lines(stats: &Statistics) -> Vec<String> {
    let best = stats
        .best_score()
        .map_or_else(|| "-".to_string(), |best| best.to_string());
    let recent = stats
        .recent_results()
        .map(|result| result.to_string())
        .collect::<Vec<_>>()
        .join("  ");

    vec![
        format!("  Games played: {}", stats.games_played().to_string().bright_cyan()),
        format!("  Win rate:     {:.0}%", stats.win_rate()),
        format!("  Best score:   {}", best.bright_yellow().bold()),
        format!(
            "  Recent:       {}",
            if recent.is_empty() { "-".to_string() } else { recent }
        ),
    ]
}

/// Print the run's statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics".bright_cyan().bold());
    for line in statistics_lines(stats) {
        println!("{line}");
    }
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult, accessible: bool) {
    println!("\n{}", "─".repeat(50).cyan());
    println!("Secret: {}", colored_code(&result.secret, accessible));
    println!("Guess:  {}", colored_code(&result.guess, accessible));
    println!("{}", "─".repeat(50).cyan());

    println!(
        "\nFeedback: {}",
        feedback_pegs(result.feedback, result.secret.len()).bold()
    );
    println!(
        "  {} correct position, {} correct color",
        result.feedback.exact().to_string().green().bold(),
        result.feedback.partial().to_string().yellow().bold()
    );

    if result.feedback.is_solved(result.secret.len()) {
        println!("\n{}", "✅ Code cracked!".green().bold());
    }
}

/// Print the result of a feedback analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FEEDBACK ANALYSIS:".bright_cyan().bold(),
        result.difficulty.name().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sampling:".bright_cyan().bold());
    println!("   Pairs scored:     {}", result.samples);
    println!("   Code length:      {}", result.code_length);
    println!("   Distinct results: {}", result.distribution.len());
    println!(
        "   Cracked by luck:  {} ({:.3}%)",
        result.solved,
        percentage(result.solved, result.samples)
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.0}", result.pairs_per_second);

    if result.mismatches.is_empty() {
        println!(
            "\n{}",
            "✅ Two-pass and counting methods agree on every pair"
                .green()
                .bold()
        );
    } else {
        println!(
            "\n{}",
            format!("❌ {} pair(s) scored differently:", result.mismatches.len())
                .red()
                .bold()
        );
        for (secret, guess) in result.mismatches.iter().take(10) {
            println!("   secret {secret}  guess {guess}");
        }
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (feedback, count) in result.sorted_distribution() {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!(
            "   {:<9} {} {count:7} ({:5.1}%)",
            feedback_pegs(feedback, result.code_length),
            bar.green(),
            percentage(count, result.samples)
        );
    }
}

/// End-of-game banner: attempts taken on a win, the secret on a loss
#[must_use]
pub fn game_over_lines(session: &Session, accessible: bool) -> Vec<String> {
    if session.state() == GameState::Won {
        vec![
            format!("\n{}", "═".repeat(60).bright_cyan()),
            format!("{}", "   🎉  C O D E   C R A C K E D !  🎉".bright_green().bold()),
            format!("{}", "═".repeat(60).bright_cyan()),
            format!(
                "\n  Solved in {}",
                attempts_phrase(session.attempts_used()).bright_cyan().bold()
            ),
        ]
    } else {
        let secret = session.reveal_secret();
        vec![
            format!("\n{}", "═".repeat(60).red()),
            format!("{}", "   💀  G A M E   O V E R".red().bold()),
            format!("{}", "═".repeat(60).red()),
            format!("\n  The code was: {}", describe_code(secret, accessible)),
            format!("                {}", colored_code(secret, accessible)),
        ]
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    #[test]
    fn history_lines_newest_first() {
        colored::control::set_override(false);

        let secret: Code = "1234".parse().unwrap();
        let mut session = Session::with_secret(Rules::new(4, 10).unwrap(), secret).unwrap();
        session.submit_guess(&[0, 0, 0, 0]).unwrap();
        session.submit_guess(&[1, 2, 4, 3]).unwrap();

        let lines = history_lines(&session, true);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" 2."));
        assert!(lines[0].contains("●●○○"));
        assert!(lines[1].contains(" 1."));
        assert!(lines[1].contains("····"));
    }

    #[test]
    fn statistics_lines_show_placeholders() {
        colored::control::set_override(false);

        let lines = statistics_lines(&Statistics::default());
        assert!(lines[2].ends_with('-'));
        assert!(lines[3].ends_with('-'));
    }

    #[test]
    fn statistics_lines_list_recent() {
        colored::control::set_override(false);

        let mut stats = Statistics::default();
        stats.record_win(4);
        stats.record_loss();
        let lines = statistics_lines(&stats);
        assert!(lines[2].ends_with('4'));
        assert!(lines[3].ends_with("Lost  4"));
    }

    #[test]
    fn game_over_lines_reveal_secret_on_loss() {
        colored::control::set_override(false);

        let secret: Code = "90".parse().unwrap();
        let mut session = Session::with_secret(Rules::new(2, 1).unwrap(), secret).unwrap();
        session.submit_guess(&[0, 9]).unwrap();

        let lines = game_over_lines(&session, false);
        assert!(lines.iter().any(|line| line.contains("The code was: Brown, Gray")));
    }

    #[test]
    fn game_over_lines_count_attempts_on_win() {
        colored::control::set_override(false);

        let secret: Code = "90".parse().unwrap();
        let mut session = Session::with_secret(Rules::new(2, 3).unwrap(), secret).unwrap();
        session.submit_guess(&[9, 0]).unwrap();

        let lines = game_over_lines(&session, true);
        assert!(lines.iter().any(|line| line.contains("Solved in 1 attempt")));
    }

    #[test]
    fn percentage_handles_zero() {
        assert!(percentage(3, 0).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
