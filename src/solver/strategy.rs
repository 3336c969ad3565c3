//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::knuth::select_knuth;
use super::minimax::choose_guess;
use crate::config::SearchLimits;
use crate::core::{Code, CodeSpace};
use crate::error::SolveError;

/// A strategy for selecting the next guess from a candidate set
pub trait Strategy {
    /// Select the next guess for the codes still consistent with the game
    ///
    /// The returned code always belongs to `space`.
    ///
    /// # Errors
    /// Returns `SolveError::ContradictoryHistory` if `candidates` is empty on
    /// a non-opening turn.
    fn select_guess<'a>(
        &self,
        space: &'a CodeSpace,
        candidates: &[&'a Code],
        is_first_guess: bool,
    ) -> Result<&'a Code, SolveError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Depth-bounded recursive minimax (default)
    Recursive(RecursiveMinimaxStrategy),
    /// One-level minimax over the whole space
    Knuth(KnuthStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        space: &'a CodeSpace,
        candidates: &[&'a Code],
        is_first_guess: bool,
    ) -> Result<&'a Code, SolveError> {
        match self {
            Self::Recursive(s) => s.select_guess(space, candidates, is_first_guess),
            Self::Knuth(s) => s.select_guess(space, candidates, is_first_guess),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "recursive", "knuth".
    /// Defaults to recursive if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, limits: SearchLimits) -> Self {
        match name {
            "knuth" => Self::Knuth(KnuthStrategy),
            _ => Self::Recursive(RecursiveMinimaxStrategy::new(limits)),
        }
    }

    /// Short name for display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Recursive(_) => "recursive",
            Self::Knuth(_) => "knuth",
        }
    }
}

/// Recursive minimax strategy
///
/// Scores a bounded pool of guesses by worst-case guesses-to-finish, searching
/// each feedback bucket up to `limits.max_depth` levels deep.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveMinimaxStrategy {
    pub limits: SearchLimits,
}

impl RecursiveMinimaxStrategy {
    #[must_use]
    pub const fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl Strategy for RecursiveMinimaxStrategy {
    fn select_guess<'a>(
        &self,
        space: &'a CodeSpace,
        candidates: &[&'a Code],
        is_first_guess: bool,
    ) -> Result<&'a Code, SolveError> {
        choose_guess(candidates, space, is_first_guess, &self.limits)
    }
}

/// Knuth's one-level minimax strategy
///
/// Always selects the code minimizing the largest remaining bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnuthStrategy;

impl Strategy for KnuthStrategy {
    fn select_guess<'a>(
        &self,
        space: &'a CodeSpace,
        candidates: &[&'a Code],
        is_first_guess: bool,
    ) -> Result<&'a Code, SolveError> {
        if is_first_guess {
            return Ok(space.opening_guess());
        }

        match candidates {
            [] => Err(SolveError::ContradictoryHistory { history: vec![] }),
            [only] | [only, _] => Ok(*only),
            _ => select_knuth(space, candidates)
                .map(|(guess, _)| guess)
                .ok_or_else(|| SolveError::ContradictoryHistory { history: vec![] }),
        }
    }
}
