//! Guess analysis command
//!
//! Shows how a guess splits the full code space and what its minimax score is.

use crate::config::SearchLimits;
use crate::core::{Code, CodeSpace, Feedback};
use crate::error::SolveError;
use crate::solver::minimax::{Search, partition, worst_case_score};
use std::time::Instant;

/// One possible feedback and how many codes would produce it
pub struct OutcomeRow {
    pub feedback: Feedback,
    pub count: usize,
}

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub total_candidates: usize,
    /// Every feedback the evaluator can produce, including ones no code gives
    pub outcomes: Vec<OutcomeRow>,
    pub largest_bucket: usize,
    /// Worst-case guesses to finish if this guess is played first
    pub minimax_score: u32,
    pub memo_entries: usize,
}

impl AnalysisResult {
    /// Outcomes that at least one code produces
    #[must_use]
    pub fn non_empty_outcomes(&self) -> usize {
        self.outcomes.iter().filter(|row| row.count > 0).count()
    }
}

/// Analyze a guess against every code of the space
///
/// # Errors
///
/// Returns an error if the guess does not fit the space or the search limits
/// are invalid.
pub fn analyze_guess(
    guess: &Code,
    space: &CodeSpace,
    limits: &SearchLimits,
) -> Result<AnalysisResult, SolveError> {
    guess.validate(space.config())?;
    limits.validate()?;

    let candidates = space.all_candidates();
    let split = partition(guess, &candidates);

    let outcomes = space
        .feedback_outcomes()
        .into_iter()
        .map(|feedback| OutcomeRow {
            feedback,
            count: split.get(feedback).len(),
        })
        .collect();

    let deadline = limits.time_budget.map(|budget| Instant::now() + budget);
    let mut search = Search::new(*limits, deadline);
    let minimax_score = worst_case_score(guess, &candidates, 0, &mut search);

    Ok(AnalysisResult {
        guess: guess.clone(),
        total_candidates: candidates.len(),
        outcomes,
        largest_bucket: split.largest(),
        minimax_score,
        memo_entries: search.memo_len(),
    })
}
