//! Candidate filtering and the best-guess search engine
//!
//! The solver owns the word table and the feedback cache and runs a
//! bounded-depth expectation search: a cheap one-ply score for every guess,
//! pruning to a shortlist, then a deeper recursive re-score of the shortlist.
//!
//! Scoring direction: scores are the expected number of candidates still
//! indistinguishable after the guess (plus a small per-ply step cost), so
//! lower is better throughout. The search is single-threaded and fully
//! deterministic; ties resolve to guess-list order.

use rustc_hash::FxHashMap;

use super::cache::FeedbackCache;
use super::outcome::Outcome;
use crate::core::{AnswerId, GuessId, Pattern, WordTable};

/// Named search knobs
///
/// Defaults: a 100-guess deep shortlist, a 0.8 shallow pruning threshold, a
/// 0.001 step cost, and a 6-guess game cap with "roate" as the fixed
/// opening.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Maximum number of shallow-ranked guesses promoted to deep re-scoring
    pub shortlist_cap: usize,
    /// Shallow-pass selectivity: keep guesses scoring below
    /// `pruning_threshold * |answers|`
    pub pruning_threshold: f64,
    /// Added per ply of lookahead; models the guess spent to get there and
    /// breaks ties toward shallower resolutions
    pub step_cost: f64,
    /// Game-simulation cap on the number of guesses
    pub max_attempts: usize,
    /// Fixed deterministic opening guess for simulated games; `None` derives
    /// the opening from an unconstrained solve
    pub opening_guess: Option<String>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            shortlist_cap: 100,
            pruning_threshold: 0.8,
            step_cost: 0.001,
            max_attempts: 6,
            opening_guess: Some("roate".to_string()),
        }
    }
}

/// A guess together with its search score (lower is better)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub guess: GuessId,
    pub score: f64,
}

/// Result of a top-level solve
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// The recommended next guess
    pub guess: GuessId,
    /// Expected remaining candidates after playing it
    pub score: f64,
    /// The candidates consistent with the constraint set, in answer order
    pub candidates: Vec<AnswerId>,
}

/// Best-guess search engine over a word table and feedback cache
///
/// One instance per word-list pair; safe to reuse across solves, the cache
/// only grows more complete.
pub struct Solver {
    table: WordTable,
    cache: FeedbackCache,
    params: SearchParams,
}

impl Solver {
    /// Create a solver with default search parameters
    #[must_use]
    pub fn new(table: WordTable) -> Self {
        Self::with_params(table, SearchParams::default())
    }

    /// Create a solver with explicit search parameters
    #[must_use]
    pub fn with_params(table: WordTable, params: SearchParams) -> Self {
        let cache = FeedbackCache::new(table.num_guesses(), table.num_answers());
        Self {
            table,
            cache,
            params,
        }
    }

    /// The word table backing this solver
    #[must_use]
    pub fn table(&self) -> &WordTable {
        &self.table
    }

    /// The search parameters in effect
    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Cached feedback for a (guess, answer) pair
    pub fn feedback(&mut self, guess: GuessId, answer: AnswerId) -> Pattern {
        self.cache.feedback(&self.table, guess, answer)
    }

    /// Diagnostic cache counters: (hits, misses, hit rate)
    #[must_use]
    pub fn cache_stats(&self) -> (u64, u64, f64) {
        (self.cache.hits(), self.cache.misses(), self.cache.hit_rate())
    }

    /// Whether `answer` is consistent with every outcome in the constraint set
    pub fn is_possible_answer(&mut self, answer: AnswerId, outcomes: &[Outcome]) -> bool {
        outcomes
            .iter()
            .all(|outcome| self.feedback(outcome.guess, answer) == outcome.pattern)
    }

    /// Narrow an answer set to those consistent with all outcomes
    ///
    /// An empty result is a legitimate terminal (contradictory constraints),
    /// not an error.
    pub fn filter_answers(&mut self, answers: &[AnswerId], outcomes: &[Outcome]) -> Vec<AnswerId> {
        answers
            .iter()
            .copied()
            .filter(|&answer| self.is_possible_answer(answer, outcomes))
            .collect()
    }

    /// Expected remaining candidates after playing `guess` against `answers`
    ///
    /// Partitions the answer set by feedback pattern; each group contributes
    /// its probability times:
    /// - 0 if the group's pattern is the all-Hit sentinel (game over),
    /// - the best achievable sub-score plus `step_cost` if lookahead budget
    ///   remains and the group still has more than one candidate (recursing
    ///   directly on the partitioned subgroup),
    /// - the group size otherwise (without lookahead, the residual cost is
    ///   bounded by how many candidates stay indistinguishable).
    pub fn score_guess(
        &mut self,
        guess: GuessId,
        pool: &[GuessId],
        answers: &[AnswerId],
        depth: usize,
        max_depth: usize,
    ) -> f64 {
        let mut groups: FxHashMap<Pattern, Vec<AnswerId>> = FxHashMap::default();
        for &answer in answers {
            let pattern = self.feedback(guess, answer);
            groups.entry(pattern).or_default().push(answer);
        }

        let num_answers = answers.len() as f64;
        let mut expected = 0.0;
        for (pattern, group) in &groups {
            let remaining = group.len();
            let probability = remaining as f64 / num_answers;
            let contribution = if pattern.is_perfect() {
                0.0
            } else if depth < max_depth && remaining > 1 {
                match self.best_guess(pool, group, depth + 1, max_depth) {
                    Some(sub) => sub.score + self.params.step_cost,
                    None => remaining as f64,
                }
            } else {
                remaining as f64
            };
            expected += probability * contribution;
        }
        expected
    }

    /// The best guess for an answer set, searching `max_depth - depth` plies
    ///
    /// Returns `None` only for an empty answer set, the no-candidates
    /// terminal. A singleton answer set short-circuits to guessing that
    /// answer directly (always legal) with score 0.
    pub fn best_guess(
        &mut self,
        pool: &[GuessId],
        answers: &[AnswerId],
        depth: usize,
        max_depth: usize,
    ) -> Option<Scored> {
        if answers.is_empty() {
            return None;
        }
        if answers.len() == 1 {
            return Some(Scored {
                guess: self.table.guess_id_of_answer(answers[0]),
                score: 0.0,
            });
        }

        // Shallow pass: zero-lookahead score for every guess in the pool,
        // pruned against the threshold. The first guess is kept
        // unconditionally so there is always a fallback survivor.
        let threshold = self.params.pruning_threshold * answers.len() as f64;
        let mut survivors: Vec<Scored> = Vec::new();
        for &guess in pool {
            let score = self.score_guess(guess, pool, answers, 0, 0);
            if survivors.is_empty() || score < threshold {
                survivors.push(Scored { guess, score });
            }
        }

        // Stable sort: equal scores keep guess-list order, so results are
        // reproducible.
        survivors.sort_by(|a, b| a.score.total_cmp(&b.score));

        if depth == max_depth {
            return survivors.first().copied();
        }

        // Deep pass: re-score the top of the shortlist with full recursion,
        // with the inner pool restricted to the survivors to bound the
        // branching factor.
        let survivor_pool: Vec<GuessId> = survivors.iter().map(|s| s.guess).collect();
        let mut best: Option<Scored> = None;
        for candidate in survivors.iter().take(self.params.shortlist_cap) {
            let score = self.score_guess(candidate.guess, &survivor_pool, answers, depth, max_depth);
            if best.is_none_or(|b| score < b.score) {
                best = Some(Scored {
                    guess: candidate.guess,
                    score,
                });
            }
        }
        best
    }

    /// Recommend the next guess given the accumulated constraint set
    ///
    /// Filters the full answer list by the outcomes and searches the full
    /// guess pool. Returns `None` when no candidate remains (contradictory
    /// constraints).
    pub fn solve(&mut self, outcomes: &[Outcome], max_depth: usize) -> Option<Recommendation> {
        let all_answers = self.table.all_answer_ids();
        let candidates = self.filter_answers(&all_answers, outcomes);
        if candidates.is_empty() {
            return None;
        }

        let pool = self.table.all_guess_ids();
        let best = self.best_guess(&pool, &candidates, 0, max_depth)?;
        Some(Recommendation {
            guess: best.guess,
            score: best.score,
            candidates,
        })
    }
}
