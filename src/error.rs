//! Solver error taxonomy
//!
//! Failures that happen mid-game carry the history accumulated so far so
//! callers can see how the game got there.

use crate::config::ConfigError;
use crate::core::{Code, CodeError, Feedback, FeedbackError, History};
use std::fmt;

/// Error type for solving and guess selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Configuration rejected before any search began
    InvalidConfiguration(ConfigError),
    /// A supplied code does not fit the game shape
    InvalidCode(CodeError),
    /// A supplied feedback value does not fit the game shape
    InvalidFeedback(FeedbackError),
    /// The guess limit ran out before the solved feedback was observed
    ExhaustedGuesses { limit: usize, history: History },
    /// No code is consistent with the observed feedback
    ContradictoryHistory { history: History },
}

impl SolveError {
    /// History accumulated before the failure, if the failure happened mid-game
    #[must_use]
    pub fn history(&self) -> Option<&History> {
        match self {
            Self::ExhaustedGuesses { history, .. } | Self::ContradictoryHistory { history } => {
                Some(history)
            }
            _ => None,
        }
    }

    /// Attach a history to a failure raised without one
    #[must_use]
    pub(crate) fn with_history(self, history: &[(Code, Feedback)]) -> Self {
        match self {
            Self::ContradictoryHistory { .. } => Self::ContradictoryHistory {
                history: history.to_vec(),
            },
            other => other,
        }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(e) => write!(f, "Invalid configuration: {e}"),
            Self::InvalidCode(e) => write!(f, "Invalid code: {e}"),
            Self::InvalidFeedback(e) => write!(f, "Invalid feedback: {e}"),
            Self::ExhaustedGuesses { limit, .. } => {
                write!(f, "Secret not found within {limit} guesses")
            }
            Self::ContradictoryHistory { history } => write!(
                f,
                "No code is consistent with the {} observed feedback value(s)",
                history.len()
            ),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfiguration(e) => Some(e),
            Self::InvalidCode(e) => Some(e),
            Self::InvalidFeedback(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SolveError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}

impl From<CodeError> for SolveError {
    fn from(e: CodeError) -> Self {
        Self::InvalidCode(e)
    }
}

impl From<FeedbackError> for SolveError {
    fn from(e: FeedbackError) -> Self {
        Self::InvalidFeedback(e)
    }
}
