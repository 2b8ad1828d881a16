//! Word list loading
//!
//! The two external word lists are the only persisted state: newline-
//! delimited files of legal guesses and of possible answers.

pub mod loader;

pub use loader::{load_from_file, load_table, words_from_slice};
