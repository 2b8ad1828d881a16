//! Wordle Lookahead Solver - CLI
//!
//! Thin glue around the search engine: loads the two word lists, builds the
//! constraint set from command-line outcomes, and prints results.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use wordle_lookahead::{
    commands::{play_game, recommend, run_benchmark},
    output::{
        print_benchmark_result, print_cache_stats, print_game_result, print_recommendation,
    },
    solver::Solver,
    wordlists::load_table,
};

#[derive(Parser)]
#[command(
    name = "wordle_lookahead",
    about = "Wordle solver using bounded-depth expectation search over feedback outcomes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the legal-guess word list (one word per line)
    #[arg(short = 'g', long, global = true, default_value = "wordle_allowed_words.txt")]
    guesses: String,

    /// Path to the possible-answer word list (one word per line)
    #[arg(short = 'a', long, global = true, default_value = "wordle_answers.txt")]
    answers: String,

    /// Lookahead depth for the search
    #[arg(short, long, global = true, default_value_t = 2)]
    depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the next guess for recorded outcomes
    Recommend {
        /// An outcome as GUESS=FEEDBACK, e.g. 'crane=--+-!' (repeatable)
        #[arg(short, long = "outcome", value_name = "GUESS=FEEDBACK")]
        outcomes: Vec<String>,
    },

    /// Simulate a full game against a known secret word
    Simulate {
        /// The secret answer to play against
        word: String,

        /// Show per-turn candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the solver over the first N answers
    Benchmark {
        /// Number of answers to play
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,
    },
}

/// Split GUESS=FEEDBACK outcome arguments
fn parse_outcomes(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|arg| match arg.split_once('=') {
            Some((guess, colors)) => Ok((guess.to_string(), colors.to_string())),
            None => bail!("Expected GUESS=FEEDBACK, got '{arg}'"),
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let table = load_table(&cli.guesses, &cli.answers)?;
    let mut solver = Solver::new(table);

    match cli.command {
        Commands::Recommend { outcomes } => {
            let pairs = parse_outcomes(&outcomes)?;
            let result = recommend(&mut solver, &pairs, cli.depth)?;
            print_recommendation(&result);
        }
        Commands::Simulate { word, verbose } => {
            let result = play_game(&mut solver, &word, cli.depth)?;
            print_game_result(&result, verbose);
        }
        Commands::Benchmark { count } => {
            let result = run_benchmark(&mut solver, count, cli.depth);
            print_benchmark_result(&result);
        }
    }

    print_cache_stats(&solver);
    Ok(())
}
