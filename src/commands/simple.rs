//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: guesses are typed as digit strings.

use crate::core::{Code, Difficulty, Peg};
use crate::game::{Game, GameState};
use crate::output::display::{colored_code, game_over_lines, history_lines, statistics_lines};
use crate::output::formatters::{attempts_phrase, describe_code};
use crate::output::palette::peg_color;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(game: &mut Game, accessible: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, accessible, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the line-based game loop over arbitrary input and output
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple_with<R: BufRead, W: Write>(
    game: &mut Game,
    accessible: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Mastermind - Interactive Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "Crack the secret code! Enter each guess as digits, e.g. 1234.")?;
    writeln!(out, "Feedback: ● right color, right spot   ○ right color, wrong spot\n")?;
    write_palette(out, accessible)?;
    writeln!(
        out,
        "Commands: 'quit' to exit, 'new' for new game, 'stats' for statistics,"
    )?;
    writeln!(out, "          'easy' / 'hard' / 'impossible' to switch difficulty\n")?;

    write_new_game_banner(game, out)?;

    loop {
        let session = game.session();
        let prompt = if session.state().is_terminal() {
            "Command".to_string()
        } else {
            format!(
                "Guess {} of {}",
                session.attempts_used() + 1,
                session.rules().max_attempts()
            )
        };

        let Some(line) = read_line(input, out, &prompt)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                game.start_game(game.difficulty());
                write_new_game_banner(game, out)?;
            }
            "stats" | "s" => {
                for stat in statistics_lines(game.statistics()) {
                    writeln!(out, "{stat}")?;
                }
                writeln!(out)?;
            }
            "history" | "h" => {
                for row in history_lines(game.session(), accessible) {
                    writeln!(out, "{row}")?;
                }
                writeln!(out)?;
            }
            other => {
                if let Ok(difficulty) = other.parse::<Difficulty>() {
                    game.start_game(difficulty);
                    write_new_game_banner(game, out)?;
                    continue;
                }

                let guess: Code = match line.parse() {
                    Ok(guess) => guess,
                    Err(e) => {
                        writeln!(out, "❌ {e}\n")?;
                        continue;
                    }
                };

                match game.submit_guess(&guess.ids()) {
                    Err(e) => writeln!(out, "❌ {e}\n")?,
                    Ok(outcome) => {
                        let session = game.session();
                        writeln!(
                            out,
                            "   {}   {} correct position, {} correct color",
                            colored_code(&guess, accessible),
                            outcome.feedback.exact().to_string().green().bold(),
                            outcome.feedback.partial().to_string().yellow().bold()
                        )?;
                        if !accessible {
                            writeln!(out, "   Your guess: {}", describe_code(&guess, false))?;
                        }

                        match outcome.state {
                            GameState::InProgress => writeln!(
                                out,
                                "   {} left\n",
                                attempts_phrase(session.attempts_remaining())
                            )?,
                            GameState::Won | GameState::Lost => {
                                for banner in game_over_lines(session, accessible) {
                                    writeln!(out, "{banner}")?;
                                }
                                for stat in statistics_lines(game.statistics()) {
                                    writeln!(out, "{stat}")?;
                                }
                                writeln!(out, "\nType 'new' to play again or 'quit' to exit.\n")?;
                            }
                        }
                    }
                }
            }
        }
    }
}

fn write_new_game_banner<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    let rules = game.session().rules();
    writeln!(
        out,
        "🔄 New {} game: {} pegs, {}\n",
        game.difficulty().name().bright_yellow().bold(),
        rules.code_length(),
        attempts_phrase(rules.max_attempts())
    )
}

fn write_palette<W: Write>(out: &mut W, accessible: bool) -> io::Result<()> {
    writeln!(out, "Colors:")?;
    for peg in Peg::all() {
        writeln!(
            out,
            "  {} {} {}",
            peg.id(),
            colored_code(&Code::new(vec![peg]), accessible),
            peg_color(peg).name
        )?;
    }
    writeln!(out)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
