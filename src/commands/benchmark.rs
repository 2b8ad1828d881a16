//! Benchmark command
//!
//! Simulates games across a batch of answers and collects guess-count
//! statistics.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::simulate::play_game;
use crate::solver::Solver;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
}

/// Simulate games against the first `count` answers at `max_depth`
///
/// Shows a progress bar while running; failed games (unsolved within the
/// attempt cap) still count their guesses toward the distribution.
pub fn run_benchmark(solver: &mut Solver, count: usize, max_depth: usize) -> BenchmarkResult {
    let secrets: Vec<String> = solver
        .table()
        .all_answer_ids()
        .iter()
        .take(count)
        .map(|&id| solver.table().answer(id).text().to_string())
        .collect();

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved_words = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in &secrets {
        pb.set_message(secret.clone());

        // Secrets come from the answer list itself, so play_game cannot fail
        if let Ok(result) = play_game(solver, secret, max_depth) {
            let guesses = result.steps.len();
            if result.solved {
                solved_words += 1;
            }
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = secrets.len();

    BenchmarkResult {
        total_words,
        solved_words,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
    }
}
