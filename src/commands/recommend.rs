//! Recommendation command
//!
//! Builds the constraint set from (guess, feedback) text pairs and asks the
//! search engine for the best next guess.

use anyhow::Result;

use crate::solver::{Outcome, Solver};

/// How many remaining candidates are worth listing verbatim
const PREVIEW_LIMIT: usize = 5;

/// Result of a recommendation request
pub struct RecommendResult {
    /// Number of answers still consistent with the constraint set
    pub remaining: usize,
    /// The candidates themselves, when few enough to list
    pub preview: Vec<String>,
    /// Best guess and its expected-remaining score; `None` when the
    /// constraints are contradictory
    pub recommendation: Option<(String, f64)>,
}

/// Recommend the next guess for a set of textual outcomes
///
/// Each pair is `(guess, feedback)` in the `'!'`/`'+'`/`'-'` notation, e.g.
/// `("crane", "--+-!")`.
///
/// # Errors
///
/// Fails if a guess word is not in the table or a feedback string is
/// malformed; both are contract violations, not game states.
pub fn recommend(
    solver: &mut Solver,
    outcomes: &[(String, String)],
    max_depth: usize,
) -> Result<RecommendResult> {
    let constraints = outcomes
        .iter()
        .map(|(guess, colors)| Outcome::from_text(solver.table(), guess, colors))
        .collect::<Result<Vec<_>, _>>()?;

    match solver.solve(&constraints, max_depth) {
        Some(result) => {
            let preview = if result.candidates.len() <= PREVIEW_LIMIT {
                result
                    .candidates
                    .iter()
                    .map(|&id| solver.table().answer(id).text().to_string())
                    .collect()
            } else {
                Vec::new()
            };
            Ok(RecommendResult {
                remaining: result.candidates.len(),
                preview,
                recommendation: Some((
                    solver.table().guess(result.guess).text().to_string(),
                    result.score,
                )),
            })
        }
        None => Ok(RecommendResult {
            remaining: 0,
            preview: Vec::new(),
            recommendation: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, WordTable};

    fn solver() -> Solver {
        let answers: Vec<Word> = ["pause", "boron", "acorn"]
            .iter()
            .map(|&t| Word::new(t).unwrap())
            .collect();
        let mut guesses = answers.clone();
        guesses.push(Word::new("crane").unwrap());
        guesses.push(Word::new("mauls").unwrap());
        Solver::new(WordTable::new(guesses, answers).unwrap())
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|&(g, c)| (g.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn recommend_narrows_to_single_candidate() {
        let mut solver = solver();
        let outcomes = pairs(&[("crane", "--+-!"), ("mauls", "-!!-+")]);

        let result = recommend(&mut solver, &outcomes, 2).unwrap();
        assert_eq!(result.remaining, 1);
        assert_eq!(result.preview, vec!["pause"]);

        let (guess, score) = result.recommendation.unwrap();
        assert_eq!(guess, "pause");
        assert!(score.abs() < f64::EPSILON);
    }

    #[test]
    fn recommend_reports_contradiction() {
        let mut solver = solver();
        let outcomes = pairs(&[("crane", "!!!!!")]);

        let result = recommend(&mut solver, &outcomes, 2).unwrap();
        assert_eq!(result.remaining, 0);
        assert!(result.recommendation.is_none());
    }

    #[test]
    fn recommend_rejects_unknown_guess() {
        let mut solver = solver();
        let outcomes = pairs(&[("zzzzz", "--+-!")]);

        assert!(recommend(&mut solver, &outcomes, 2).is_err());
    }

    #[test]
    fn recommend_rejects_malformed_feedback() {
        let mut solver = solver();
        let outcomes = pairs(&[("crane", "--x-!")]);

        assert!(recommend(&mut solver, &outcomes, 2).is_err());
    }

    #[test]
    fn recommend_with_no_outcomes_covers_all_answers() {
        let mut solver = solver();
        let result = recommend(&mut solver, &[], 0).unwrap();

        assert_eq!(result.remaining, 3);
        assert_eq!(result.preview.len(), 3);
        assert!(result.recommendation.is_some());
    }
}
