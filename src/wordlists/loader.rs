//! Word list loading utilities
//!
//! Loads the two newline-delimited word lists (legal guesses and possible
//! answers) and assembles them into a `WordTable`.

use anyhow::Context;
use std::fs;
use std::io;
use std::path::Path;

use crate::core::{Word, WordTable};

/// Load words from a newline-delimited file
///
/// One word per line, no header. Blank lines (including trailing ones) and
/// entries that are not valid 5-letter words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_lookahead::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordle_answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_lookahead::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load both word lists and build the word table
///
/// # Errors
///
/// Fails if either file cannot be read or if an answer word is missing from
/// the guess list.
pub fn load_table<P: AsRef<Path>>(guesses_path: P, answers_path: P) -> anyhow::Result<WordTable> {
    let guesses = load_from_file(&guesses_path).with_context(|| {
        format!(
            "failed to load guess list from {}",
            guesses_path.as_ref().display()
        )
    })?;
    let answers = load_from_file(&answers_path).with_context(|| {
        format!(
            "failed to load answer list from {}",
            answers_path.as_ref().display()
        )
    })?;
    Ok(WordTable::new(guesses, answers)?)
}
