//! Game simulation command
//!
//! Plays one full game against a known secret: a fixed opening guess, then
//! repeated solves with the growing constraint set until solved or the
//! attempt cap is reached.

use anyhow::{anyhow, Result};

use crate::core::Pattern;
use crate::solver::{Outcome, Solver};

/// One turn of a simulated game
pub struct GameStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Record of a simulated game
pub struct GameResult {
    pub secret: String,
    pub solved: bool,
    pub steps: Vec<GameStep>,
}

/// Play a game against `secret`, recommending each guess at `max_depth`
///
/// The opening comes from `SearchParams::opening_guess`; with no configured
/// opening, an unconstrained solve picks it.
///
/// # Errors
///
/// Fails if the secret is not a possible answer or the configured opening is
/// not a legal guess.
pub fn play_game(solver: &mut Solver, secret: &str, max_depth: usize) -> Result<GameResult> {
    let answer = solver.table().answer_id(secret)?;

    let mut guess = match solver.params().opening_guess.clone() {
        Some(text) => solver.table().guess_id(&text)?,
        None => {
            solver
                .solve(&[], max_depth)
                .ok_or_else(|| anyhow!("answer list is empty"))?
                .guess
        }
    };

    let all_answers = solver.table().all_answer_ids();
    let mut outcomes: Vec<Outcome> = Vec::new();
    let mut steps: Vec<GameStep> = Vec::new();

    for _ in 0..solver.params().max_attempts {
        let candidates_before = solver.filter_answers(&all_answers, &outcomes).len();

        let pattern = solver.feedback(guess, answer);
        outcomes.push(Outcome::new(guess, pattern));

        let candidates_after = solver.filter_answers(&all_answers, &outcomes).len();
        steps.push(GameStep {
            word: solver.table().guess(guess).text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
        });

        if pattern.is_perfect() {
            return Ok(GameResult {
                secret: secret.to_string(),
                solved: true,
                steps,
            });
        }

        match solver.solve(&outcomes, max_depth) {
            Some(result) => guess = result.guess,
            // Contradictory feedback; nothing left to guess
            None => break,
        }
    }

    Ok(GameResult {
        secret: secret.to_string(),
        solved: false,
        steps,
    })
}
