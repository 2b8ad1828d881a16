//! Outcomes
//!
//! An outcome is one recorded piece of evidence: a guess and the feedback it
//! produced. A slice of outcomes is the constraint set accumulated over a
//! game, used to filter the answer set down to the remaining candidates.

use std::fmt;

use crate::core::{GuessId, Pattern, WordTable};

/// One (guess, feedback) fact ruling candidate answers in or out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub guess: GuessId,
    pub pattern: Pattern,
}

/// Error type for building outcomes from text
///
/// Both variants are contract violations: outcome text only ever comes from
/// this system's own output or trusted fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    /// The guess word is not in the table
    UnknownGuess(String),
    /// The feedback notation contains an unrecognized character or length
    BadPattern(String),
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGuess(word) => write!(f, "Unknown guess word: {word}"),
            Self::BadPattern(text) => write!(f, "Malformed feedback pattern: {text}"),
        }
    }
}

impl std::error::Error for OutcomeError {}

impl Outcome {
    /// Create an outcome from known ids
    #[must_use]
    pub const fn new(guess: GuessId, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// Build an outcome from the human notation, e.g. `("crane", "--+-!")`
    ///
    /// # Errors
    /// Returns `OutcomeError` if the guess is not in the table or the
    /// feedback text is malformed.
    pub fn from_text(table: &WordTable, guess: &str, colors: &str) -> Result<Self, OutcomeError> {
        let guess = table
            .guess_id(guess)
            .map_err(|_| OutcomeError::UnknownGuess(guess.to_string()))?;
        let pattern = Pattern::from_str(colors)
            .ok_or_else(|| OutcomeError::BadPattern(colors.to_string()))?;
        Ok(Self { guess, pattern })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn table() -> WordTable {
        let words: Vec<Word> = ["crane", "mauls"]
            .iter()
            .map(|&t| Word::new(t).unwrap())
            .collect();
        WordTable::new(words.clone(), words).unwrap()
    }

    #[test]
    fn outcome_from_text() {
        let table = table();
        let outcome = Outcome::from_text(&table, "crane", "--+-!").unwrap();
        assert_eq!(outcome.guess, table.guess_id("crane").unwrap());
        assert_eq!(outcome.pattern.to_string(), "--+-!");
    }

    #[test]
    fn outcome_unknown_guess() {
        let table = table();
        assert_eq!(
            Outcome::from_text(&table, "zzzzz", "--+-!"),
            Err(OutcomeError::UnknownGuess("zzzzz".to_string()))
        );
    }

    #[test]
    fn outcome_bad_pattern() {
        let table = table();
        assert_eq!(
            Outcome::from_text(&table, "crane", "--?-!"),
            Err(OutcomeError::BadPattern("--?-!".to_string()))
        );
        assert_eq!(
            Outcome::from_text(&table, "crane", "--!"),
            Err(OutcomeError::BadPattern("--!".to_string()))
        );
    }
}
