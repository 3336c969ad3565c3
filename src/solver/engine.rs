//! Main Mastermind solver interface

use super::game::{Game, SolveRecord};
use super::strategy::Strategy;
use crate::config::GameConfig;
use crate::core::{Code, CodeSpace, Feedback};
use crate::error::SolveError;

/// Main Mastermind solver
///
/// Coordinates the solving process using a given strategy. Histories passed in
/// from outside are validated against the space before any filtering.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    space: &'a CodeSpace,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and code space
    pub const fn new(strategy: S, space: &'a CodeSpace) -> Self {
        Self { strategy, space }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.space.config()
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn space(&self) -> &'a CodeSpace {
        self.space
    }

    /// Codes consistent with every (guess, feedback) pair of `history`
    ///
    /// # Errors
    /// Returns `InvalidCode` or `InvalidFeedback` if a history entry does not
    /// fit the game shape.
    pub fn candidates(&self, history: &[(Code, Feedback)]) -> Result<Vec<&'a Code>, SolveError> {
        let config = self.config();
        for (guess, feedback) in history {
            guess.validate(config)?;
            feedback.validate(config.code_length)?;
        }

        Ok(self
            .space
            .codes()
            .iter()
            .filter(|candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| Feedback::score(guess, candidate) == *observed)
            })
            .collect())
    }

    /// Count how many candidates remain given the history
    ///
    /// # Errors
    /// Same as [`Solver::candidates`].
    pub fn count_candidates(&self, history: &[(Code, Feedback)]) -> Result<usize, SolveError> {
        self.candidates(history).map(|candidates| candidates.len())
    }

    /// Best next guess given the history so far
    ///
    /// An empty history gets the opening guess.
    ///
    /// # Errors
    /// Returns `ContradictoryHistory` (carrying `history`) if no code is
    /// consistent with it, or a validation error for a malformed entry.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::config::{GameConfig, SearchLimits};
    /// use mastermind_minimax::core::{Code, CodeSpace, Feedback};
    /// use mastermind_minimax::solver::{RecursiveMinimaxStrategy, Solver};
    ///
    /// let space = CodeSpace::generate(GameConfig::default()).unwrap();
    /// let solver = Solver::new(RecursiveMinimaxStrategy::new(SearchLimits::with_depth(1)), &space);
    ///
    /// assert_eq!(solver.next_guess(&[]).unwrap().to_string(), "RRGG");
    ///
    /// let opener = Code::parse("RRGG", space.config()).unwrap();
    /// let next = solver.next_guess(&[(opener, Feedback::new(1, 1))]).unwrap();
    /// assert_ne!(next.to_string(), "RRGG");
    /// ```
    pub fn next_guess(&self, history: &[(Code, Feedback)]) -> Result<&'a Code, SolveError> {
        let candidates = self.candidates(history)?;
        self.guess_among(&candidates, history)
    }

    /// Best next guess for candidates already filtered by `history`
    ///
    /// # Errors
    /// Same as [`Solver::next_guess`], minus history validation.
    pub fn guess_among(
        &self,
        candidates: &[&'a Code],
        history: &[(Code, Feedback)],
    ) -> Result<&'a Code, SolveError> {
        if candidates.is_empty() {
            return Err(SolveError::ContradictoryHistory {
                history: history.to_vec(),
            });
        }

        self.strategy
            .select_guess(self.space, candidates, history.is_empty())
            .map_err(|e| e.with_history(history))
    }

    /// Play a full game against `secret`
    ///
    /// Game failures (contradiction, guess limit) are reported in the record.
    ///
    /// # Errors
    /// Returns `InvalidCode` if the secret does not fit the space.
    pub fn solve(&self, secret: &Code) -> Result<SolveRecord, SolveError> {
        Ok(Game::new(&self.strategy, self.space, secret.clone())?.run())
    }
}
