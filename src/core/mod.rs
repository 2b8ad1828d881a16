//! Core domain types
//!
//! Fundamental types for the solver: words with precomputed letter multisets,
//! feedback patterns with their packed integer encoding, and the immutable
//! word table with dense ids. Everything here is pure and side-effect free.

mod pattern;
mod table;
mod word;

pub use pattern::{Feedback, Pattern};
pub use table::{AnswerId, GuessId, TableError, WordTable};
pub use word::{Word, WordError};

/// Fixed word length; the whole system assumes 5-letter words
pub const WORD_LENGTH: usize = 5;
