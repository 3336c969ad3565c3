//! Next-guess suggestion for a game played elsewhere
//!
//! The history arrives as `GUESS=E,C` entries, e.g. `RRGG=1,1`.

use crate::config::GameConfig;
use crate::core::{Code, Feedback, FeedbackError, History};
use crate::error::SolveError;
use crate::solver::minimax::largest_bucket;
use crate::solver::{Solver, Strategy};

/// How many remaining candidates a suggestion lists
const SAMPLE_SIZE: usize = 10;

/// Result of a suggestion
pub struct Suggestion {
    pub guess: Code,
    pub candidates_remaining: usize,
    pub worst_case: usize,
    /// The first few remaining candidates, in enumeration order
    pub sample: Vec<Code>,
    pub turn: usize,
}

/// Parse one `GUESS=E,C` history entry
///
/// # Errors
///
/// Returns an error if the entry has no `=`, the code does not fit `config`,
/// or the feedback is malformed or has more pegs than positions.
///
/// # Examples
/// ```
/// use mastermind_minimax::commands::parse_history_entry;
/// use mastermind_minimax::config::GameConfig;
/// use mastermind_minimax::core::Feedback;
///
/// let (guess, feedback) = parse_history_entry("rrgg=1,1", &GameConfig::default()).unwrap();
/// assert_eq!(guess.to_string(), "RRGG");
/// assert_eq!(feedback, Feedback::new(1, 1));
/// ```
pub fn parse_history_entry(entry: &str, config: &GameConfig) -> Result<(Code, Feedback), SolveError> {
    let (code, feedback) = entry
        .split_once('=')
        .ok_or_else(|| FeedbackError::Malformed(entry.to_string()))?;

    let code = Code::parse(code, config)?;
    let feedback: Feedback = feedback.trim().parse()?;
    feedback.validate(config.code_length)?;

    Ok((code, feedback))
}

/// Parse every entry of a history, oldest first
///
/// # Errors
///
/// Returns the first entry error.
pub fn parse_history(entries: &[String], config: &GameConfig) -> Result<History, SolveError> {
    entries
        .iter()
        .map(|entry| parse_history_entry(entry, config))
        .collect()
}

/// Suggest the next guess for a history
///
/// # Errors
///
/// Returns `ContradictoryHistory` if no code fits the history, or a
/// validation error for a malformed entry.
pub fn suggest_next<S: Strategy>(
    solver: &Solver<S>,
    history: &[(Code, Feedback)],
) -> Result<Suggestion, SolveError> {
    let candidates = solver.candidates(history)?;
    let guess = solver.guess_among(&candidates, history)?;

    Ok(Suggestion {
        guess: guess.clone(),
        candidates_remaining: candidates.len(),
        worst_case: largest_bucket(guess, &candidates),
        sample: candidates.iter().take(SAMPLE_SIZE).map(|&c| c.clone()).collect(),
        turn: history.len() + 1,
    })
}
