//! Display functions for command results

use colored::Colorize;

use super::formatters::{colorize_guess, distribution_bar};
use crate::commands::{BenchmarkResult, GameResult, RecommendResult};
use crate::solver::Solver;

/// Print a recommendation result
pub fn print_recommendation(result: &RecommendResult) {
    println!("Num possible answers: {}", result.remaining);

    if !result.preview.is_empty() {
        let listing: Vec<String> = result.preview.iter().map(|w| format!("'{w}'")).collect();
        println!("POSSIBLE ANSWERS: {}", listing.join(" "));
    }

    match &result.recommendation {
        Some((guess, score)) => {
            println!(
                "\n{} {}  (expected remaining: {score:.3})",
                "Best guess:".bright_cyan().bold(),
                guess.to_uppercase().bright_yellow().bold()
            );
        }
        None => {
            println!("{}", "No possible answers remain.".red().bold());
        }
    }
}

/// Print a simulated game record
pub fn print_game_result(result: &GameResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colorize_guess(&step.word, step.pattern),
            step.pattern
        );
        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=6 {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let fraction = count as f64 / result.total_words as f64;
            let bar = distribution_bar(fraction, 40);
            println!("   {guess_count}: {bar} {count:4} ({:5.1}%)", fraction * 100.0);
        }
    }
}

/// Print the diagnostic cache counters
pub fn print_cache_stats(solver: &Solver) {
    let (hits, misses, rate) = solver.cache_stats();
    println!(
        "\n{} hits: {hits}, misses: {misses}, hit rate: {rate:.3}",
        "Feedback cache:".bright_black()
    );
}
