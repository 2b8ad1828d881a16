//! Wordle Lookahead Solver
//!
//! Computes the guess that best narrows the remaining candidate answers of a
//! Wordle-style game, using a bounded-depth expectation search over the
//! feedback-pattern outcome space: a cheap one-ply score for every guess,
//! pruning to a shortlist, then a deeper recursive re-score.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_lookahead::core::{Word, WordTable};
//! use wordle_lookahead::solver::{Outcome, Solver};
//!
//! let words: Vec<Word> = ["pause", "boron", "crane"]
//!     .iter()
//!     .map(|&w| Word::new(w).unwrap())
//!     .collect();
//! let table = WordTable::new(words.clone(), words).unwrap();
//! let mut solver = Solver::new(table);
//!
//! let outcome = Outcome::from_text(solver.table(), "crane", "--+-!").unwrap();
//! let result = solver.solve(&[outcome], 1).unwrap();
//! assert_eq!(solver.table().guess(result.guess).text(), "pause");
//! ```

// Core domain types
pub mod core;

// Search and scoring engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
