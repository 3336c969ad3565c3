//! Code solving command
//!
//! Solves a specific secret and returns the solution path.

use crate::core::{Code, CodeSpace, Feedback};
use crate::error::SolveError;
use crate::solver::minimax::largest_bucket;
use crate::solver::{Solver, Strategy};
use rand::prelude::IndexedRandom;

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
    pub failure: Option<SolveError>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Largest bucket the guess could have left
    pub worst_case: usize,
}

/// Pick a secret uniformly from the space
#[must_use]
pub fn random_secret(space: &CodeSpace) -> Option<&Code> {
    space.codes().choose(&mut rand::rng())
}

/// Solve a specific secret using the given solver and strategy
///
/// A game that fails (guess limit, contradiction) still returns `Ok` with the
/// failure recorded in the result.
///
/// # Errors
///
/// Returns an error if the secret does not fit the solver's code space.
pub fn solve_code<S: Strategy>(
    secret: &Code,
    solver: &Solver<S>,
) -> Result<SolveResult, SolveError> {
    let record = solver.solve(secret)?;

    let mut guesses = Vec::with_capacity(record.history.len());
    for (turn, (guess, feedback)) in record.history.iter().enumerate() {
        let played = &record.history[..turn];
        let candidates = solver.candidates(played)?;

        let candidates_after = if feedback.is_solved(secret.len()) {
            1
        } else {
            match record.candidate_counts.get(turn + 1) {
                Some(&count) => count,
                None => solver.count_candidates(&record.history[..=turn])?,
            }
        };

        guesses.push(GuessStep {
            guess: guess.clone(),
            feedback: *feedback,
            candidates_before: candidates.len(),
            candidates_after,
            worst_case: largest_bucket(guess, &candidates),
        });
    }

    Ok(SolveResult {
        success: record.success,
        guesses,
        secret: secret.clone(),
        failure: record.failure,
    })
}
