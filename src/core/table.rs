//! Word table
//!
//! Two immutable ordered word lists, guesses and answers, addressed by dense
//! integer ids. Both lists are loaded once at startup; the ids are stable for
//! the lifetime of the table.

use rustc_hash::FxHashMap;
use std::fmt;

use super::Word;

/// Dense index into the guess list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuessId(pub u16);

/// Dense index into the answer list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnswerId(pub u16);

/// Error type for word table construction and lookup
///
/// A failed lookup on a caller-supplied word is a contract violation, not a
/// recoverable user error: every outcome the solver sees originates from
/// table entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The word is not in the table
    NotFound(String),
    /// An answer word is missing from the guess list
    AnswerNotGuessable(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(word) => write!(f, "Word not in table: {word}"),
            Self::AnswerNotGuessable(word) => {
                write!(f, "Answer is not a legal guess: {word}")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Immutable guess and answer lists with dense id lookup
///
/// Answers must be a subset of guesses (it is always legal to guess an
/// answer); the constructor enforces this and precomputes the answer-to-guess
/// id mapping the search engine relies on.
pub struct WordTable {
    guesses: Vec<Word>,
    answers: Vec<Word>,
    guess_ids: FxHashMap<String, GuessId>,
    answer_ids: FxHashMap<String, AnswerId>,
    answer_guess_ids: Vec<GuessId>,
}

impl WordTable {
    /// Build a table from the guess and answer lists
    ///
    /// # Errors
    /// Returns `TableError::AnswerNotGuessable` if an answer word is absent
    /// from the guess list.
    pub fn new(guesses: Vec<Word>, answers: Vec<Word>) -> Result<Self, TableError> {
        let guess_ids: FxHashMap<String, GuessId> = guesses
            .iter()
            .enumerate()
            .map(|(i, word)| (word.text().to_string(), GuessId(i as u16)))
            .collect();
        let answer_ids: FxHashMap<String, AnswerId> = answers
            .iter()
            .enumerate()
            .map(|(i, word)| (word.text().to_string(), AnswerId(i as u16)))
            .collect();

        let answer_guess_ids = answers
            .iter()
            .map(|word| {
                guess_ids
                    .get(word.text())
                    .copied()
                    .ok_or_else(|| TableError::AnswerNotGuessable(word.text().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            guesses,
            answers,
            guess_ids,
            answer_ids,
            answer_guess_ids,
        })
    }

    /// Number of legal guesses
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }

    /// Number of possible answers
    #[must_use]
    pub fn num_answers(&self) -> usize {
        self.answers.len()
    }

    /// The guess word for an id
    #[must_use]
    pub fn guess(&self, id: GuessId) -> &Word {
        &self.guesses[id.0 as usize]
    }

    /// The answer word for an id
    #[must_use]
    pub fn answer(&self, id: AnswerId) -> &Word {
        &self.answers[id.0 as usize]
    }

    /// Look up a guess id by text
    ///
    /// # Errors
    /// Returns `TableError::NotFound` if the word is not a legal guess.
    pub fn guess_id(&self, text: &str) -> Result<GuessId, TableError> {
        self.guess_ids
            .get(text)
            .copied()
            .ok_or_else(|| TableError::NotFound(text.to_string()))
    }

    /// Look up an answer id by text
    ///
    /// # Errors
    /// Returns `TableError::NotFound` if the word is not a possible answer.
    pub fn answer_id(&self, text: &str) -> Result<AnswerId, TableError> {
        self.answer_ids
            .get(text)
            .copied()
            .ok_or_else(|| TableError::NotFound(text.to_string()))
    }

    /// The guess id corresponding to an answer
    ///
    /// Infallible: the constructor verified answers are a subset of guesses.
    #[must_use]
    pub fn guess_id_of_answer(&self, id: AnswerId) -> GuessId {
        self.answer_guess_ids[id.0 as usize]
    }

    /// All guess ids in list order
    #[must_use]
    pub fn all_guess_ids(&self) -> Vec<GuessId> {
        (0..self.guesses.len()).map(|i| GuessId(i as u16)).collect()
    }

    /// All answer ids in list order
    #[must_use]
    pub fn all_answer_ids(&self) -> Vec<AnswerId> {
        (0..self.answers.len()).map(|i| AnswerId(i as u16)).collect()
    }
}
