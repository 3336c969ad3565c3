//! The solve loop for one secret
//!
//! A small state machine: a game stays `Active` until the solved feedback is
//! observed or it fails, and both end states are final.

use super::minimax::filter_candidates;
use super::strategy::Strategy;
use crate::core::{Code, CodeSpace, Feedback, History};
use crate::error::SolveError;
use log::{debug, info, warn};

/// Where a game stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    Active,
    Solved,
    Failed(SolveError),
}

impl GameState {
    /// True for `Solved` and `Failed`
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Outcome of solving one secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRecord {
    pub success: bool,
    pub guesses_used: usize,
    /// Every (guess, feedback) pair played, oldest first
    pub history: History,
    /// Candidate count before each guess, aligned with `history`
    pub candidate_counts: Vec<usize>,
    pub failure: Option<SolveError>,
}

/// One game against a known secret
pub struct Game<'a, S: Strategy> {
    strategy: &'a S,
    space: &'a CodeSpace,
    secret: Code,
    candidates: Vec<&'a Code>,
    history: History,
    candidate_counts: Vec<usize>,
    guess_number: usize,
    state: GameState,
}

impl<'a, S: Strategy> Game<'a, S> {
    /// Start a game with every code of the space as a candidate
    ///
    /// # Errors
    /// Returns `SolveError::InvalidCode` if the secret does not fit the space.
    pub fn new(strategy: &'a S, space: &'a CodeSpace, secret: Code) -> Result<Self, SolveError> {
        secret.validate(space.config())?;

        Ok(Self {
            strategy,
            space,
            secret,
            candidates: space.all_candidates(),
            history: Vec::new(),
            candidate_counts: Vec::new(),
            guess_number: 1,
            state: GameState::Active,
        })
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Codes still consistent with the feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[&'a Code] {
        &self.candidates
    }

    /// Guesses played so far
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Play one guess, or do nothing if the game is already over
    pub fn step(&mut self) -> &GameState {
        if self.state.is_finished() {
            return &self.state;
        }

        if self.candidates.is_empty() {
            warn!("no candidates remain after {} guesses", self.history.len());
            self.state = GameState::Failed(SolveError::ContradictoryHistory {
                history: self.history.clone(),
            });
            return &self.state;
        }

        let limit = self.space.config().max_guesses;
        if self.guess_number > limit {
            warn!("secret {} not found within {limit} guesses", self.secret);
            self.state = GameState::Failed(SolveError::ExhaustedGuesses {
                limit,
                history: self.history.clone(),
            });
            return &self.state;
        }

        let is_first_guess = self.history.is_empty();
        let guess = match self
            .strategy
            .select_guess(self.space, &self.candidates, is_first_guess)
        {
            Ok(guess) => guess,
            Err(e) => {
                self.state = GameState::Failed(e.with_history(&self.history));
                return &self.state;
            }
        };

        let feedback = Feedback::score(guess, &self.secret);
        info!(
            "guess {}: {guess} -> {feedback} ({} candidates)",
            self.guess_number,
            self.candidates.len()
        );

        self.candidate_counts.push(self.candidates.len());
        self.history.push((guess.clone(), feedback));

        if feedback.is_solved(self.secret.len()) {
            debug!("solved {} in {} guesses", self.secret, self.guess_number);
            self.state = GameState::Solved;
        } else {
            self.candidates = filter_candidates(&self.candidates, guess, feedback);
            self.guess_number += 1;
        }

        &self.state
    }

    /// Step until the game is over and report the outcome
    #[must_use]
    pub fn run(mut self) -> SolveRecord {
        while !self.step().is_finished() {}

        let failure = match self.state {
            GameState::Failed(e) => Some(e),
            GameState::Active | GameState::Solved => None,
        };

        SolveRecord {
            success: failure.is_none(),
            guesses_used: self.history.len(),
            history: self.history,
            candidate_counts: self.candidate_counts,
            failure,
        }
    }
}
