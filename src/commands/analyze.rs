//! Feedback analysis command
//!
//! Samples random (secret, guess) pairs at a difficulty, scores them in
//! parallel with both evaluation methods, and reports how the feedback is
//! distributed along with any pair where the two methods disagree.

use crate::core::{Code, Difficulty, Feedback};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Configuration for an analysis run
pub struct AnalysisConfig {
    pub difficulty: Difficulty,
    pub samples: usize,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl AnalysisConfig {
    #[must_use]
    pub const fn new(difficulty: Difficulty, samples: usize) -> Self {
        Self {
            difficulty,
            samples,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of an analysis run
pub struct AnalysisResult {
    pub difficulty: Difficulty,
    pub code_length: usize,
    pub samples: usize,
    pub distribution: FxHashMap<Feedback, usize>,
    pub mismatches: Vec<(Code, Code)>,
    pub solved: usize,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

impl AnalysisResult {
    /// Distribution entries, most exact matches first, then most partial
    #[must_use]
    pub fn sorted_distribution(&self) -> Vec<(Feedback, usize)> {
        let mut entries: Vec<(Feedback, usize)> = self
            .distribution
            .iter()
            .map(|(&feedback, &count)| (feedback, count))
            .collect();
        entries.sort_by(|a, b| b.0.cmp(&a.0));
        entries
    }
}

/// Run the analysis described by `config`
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a constant).
pub fn run_analysis(config: &AnalysisConfig) -> AnalysisResult {
    let code_length = config.difficulty.rules().code_length();
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let pairs: Vec<(Code, Code)> = (0..config.samples)
        .map(|_| {
            (
                Code::random(code_length, &mut rng),
                Code::random(code_length, &mut rng),
            )
        })
        .collect();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("progress template is valid")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    // Err carries the index of a pair the two methods disagree on
    let scored: Vec<Result<Feedback, usize>> = pairs
        .par_iter()
        .enumerate()
        .map(|(index, (secret, guess))| {
            let two_pass = Feedback::calculate(secret, guess);
            let closed_form = Feedback::from_counts(secret, guess);
            pb.inc(1);
            match (two_pass, closed_form) {
                (Ok(a), Ok(b)) if a == b => Ok(a),
                _ => Err(index),
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<Feedback, usize> = FxHashMap::default();
    let mut mismatches = Vec::new();
    for result in scored {
        match result {
            Ok(feedback) => *distribution.entry(feedback).or_insert(0) += 1,
            Err(index) => mismatches.push(pairs[index].clone()),
        }
    }

    if !mismatches.is_empty() {
        warn!(count = mismatches.len(), "evaluation methods disagree");
    }

    let solved = distribution
        .iter()
        .filter(|(feedback, _)| feedback.is_solved(code_length))
        .map(|(_, &count)| count)
        .sum();

    info!(
        samples = config.samples,
        distinct = distribution.len(),
        elapsed_ms = duration.as_millis() as u64,
        "analysis complete"
    );

    AnalysisResult {
        difficulty: config.difficulty,
        code_length,
        samples: config.samples,
        distribution,
        mismatches,
        solved,
        duration,
        pairs_per_second: config.samples as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
