//! Mastermind - CLI
//!
//! Code-breaking puzzle with TUI and line-based modes, plus scoring tools.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use mastermind::{
    commands::{AnalysisConfig, run_analysis, run_simple, score_codes},
    core::Difficulty,
    game::Game,
    logging::init_logging,
    output::{print_analysis_result, print_score_result, print_statistics},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack the secret code of colored pegs (exact/partial feedback)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (4 pegs, 10 tries, default), hard (6, 12), impossible (8, 15)
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: Difficulty,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show peg numbers on every color
    #[arg(short, long, global = true)]
    accessible: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type guesses as digits)
    Simple,

    /// Score a guess against a secret, e.g. `score 1122 2211`
    Score {
        /// The secret code, as digits 0-9
        secret: String,

        /// The guess, as digits 0-9
        guess: String,
    },

    /// Sample random codes and report the feedback distribution
    Analyze {
        /// Number of random (secret, guess) pairs to score
        #[arg(short = 'n', long, default_value = "100000")]
        samples: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.difficulty, cli.seed, cli.accessible),
        Commands::Simple => run_simple_command(cli.difficulty, cli.seed, cli.accessible),
        Commands::Score { secret, guess } => {
            let result = score_codes(&secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result, cli.accessible);
            Ok(())
        }
        Commands::Analyze { samples } => {
            run_analyze_command(cli.difficulty, samples, cli.seed);
            Ok(())
        }
    }
}

fn new_game(difficulty: Difficulty, seed: Option<u64>) -> Game {
    seed.map_or_else(
        || Game::new(difficulty),
        |seed| Game::with_seed(difficulty, seed),
    )
}

fn run_play_command(difficulty: Difficulty, seed: Option<u64>, accessible: bool) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(new_game(difficulty, seed), accessible);
    run_tui(app)
}

fn run_simple_command(difficulty: Difficulty, seed: Option<u64>, accessible: bool) -> Result<()> {
    let mut game = new_game(difficulty, seed);
    run_simple(&mut game, accessible)?;

    if game.statistics().games_played() > 0 {
        print_statistics(game.statistics());
    }
    Ok(())
}

fn run_analyze_command(difficulty: Difficulty, samples: usize, seed: Option<u64>) {
    let rules = difficulty.rules();
    println!(
        "Scoring {samples} random pairs at {difficulty} ({} pegs)...",
        rules.code_length()
    );

    let config = AnalysisConfig {
        seed,
        ..AnalysisConfig::new(difficulty, samples)
    };
    let result = run_analysis(&config);
    print_analysis_result(&result);
}
