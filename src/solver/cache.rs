//! Feedback cache
//!
//! Dense memo table for feedback patterns, keyed by (guess id, answer id).
//! Feedback for a fixed pair is a pure function, so entries are filled lazily
//! and never invalidated; the table is sized for every pair up front and is
//! reused heavily across the whole search tree within and across solves.

use crate::core::{AnswerId, GuessId, Pattern, WordTable};

/// Absent-entry sentinel; valid encoded patterns are <= 682
const EMPTY: u16 = u16::MAX;

/// Memo table of encoded feedback patterns with hit/miss accounting
///
/// Holds `num_guesses * num_answers` entries, allocated once. The hit and
/// miss counters are diagnostic only, not part of the functional contract.
pub struct FeedbackCache {
    entries: Vec<u16>,
    num_answers: usize,
    hits: u64,
    misses: u64,
}

impl FeedbackCache {
    /// Allocate an empty cache covering every (guess, answer) pair
    #[must_use]
    pub fn new(num_guesses: usize, num_answers: usize) -> Self {
        Self {
            entries: vec![EMPTY; num_guesses * num_answers],
            num_answers,
            hits: 0,
            misses: 0,
        }
    }

    /// Feedback for a (guess, answer) pair, computing and storing it on miss
    pub fn feedback(&mut self, table: &WordTable, guess: GuessId, answer: AnswerId) -> Pattern {
        let index = guess.0 as usize * self.num_answers + answer.0 as usize;
        let stored = self.entries[index];
        if stored != EMPTY {
            self.hits += 1;
            return Pattern::new(stored);
        }
        self.misses += 1;
        let pattern = Pattern::calculate(table.guess(guess), table.answer(answer));
        self.entries[index] = pattern.value();
        pattern
    }

    /// Number of lookups served from the table
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to compute feedback
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Fraction of lookups served from the table, or 0.0 before any lookup
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, WordTable};

    fn table() -> WordTable {
        let words: Vec<Word> = ["crane", "pause", "abbey"]
            .iter()
            .map(|&t| Word::new(t).unwrap())
            .collect();
        WordTable::new(words.clone(), words).unwrap()
    }

    #[test]
    fn cache_miss_then_hit() {
        let table = table();
        let mut cache = FeedbackCache::new(table.num_guesses(), table.num_answers());

        let first = cache.feedback(&table, GuessId(0), AnswerId(1));
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 1);

        let second = cache.feedback(&table, GuessId(0), AnswerId(1));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);

        // Same pure result either way
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "--+-!");
    }

    #[test]
    fn cache_distinct_pairs_are_distinct_entries() {
        let table = table();
        let mut cache = FeedbackCache::new(table.num_guesses(), table.num_answers());

        cache.feedback(&table, GuessId(0), AnswerId(1));
        cache.feedback(&table, GuessId(1), AnswerId(0));
        cache.feedback(&table, GuessId(2), AnswerId(2));
        assert_eq!(cache.misses(), 3);
        assert_eq!(cache.hits(), 0);
    }

    #[test]
    fn cache_stores_perfect_sentinel() {
        let table = table();
        let mut cache = FeedbackCache::new(table.num_guesses(), table.num_answers());

        let pattern = cache.feedback(&table, GuessId(2), AnswerId(2));
        assert!(pattern.is_perfect());
        let again = cache.feedback(&table, GuessId(2), AnswerId(2));
        assert!(again.is_perfect());
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn cache_hit_rate() {
        let table = table();
        let mut cache = FeedbackCache::new(table.num_guesses(), table.num_answers());
        assert_eq!(cache.hit_rate(), 0.0);

        cache.feedback(&table, GuessId(0), AnswerId(0));
        cache.feedback(&table, GuessId(0), AnswerId(0));
        cache.feedback(&table, GuessId(0), AnswerId(0));
        cache.feedback(&table, GuessId(0), AnswerId(0));
        assert!((cache.hit_rate() - 0.75).abs() < f64::EPSILON);
    }
}
