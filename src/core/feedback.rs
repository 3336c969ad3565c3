//! Mastermind feedback calculation and representation
//!
//! Feedback is the classic peg pair:
//! - `exact`: positions where guess and secret agree (black pegs)
//! - `color`: further shared colors once exact matches are removed, each
//!   instance consumed at most once on either side (white pegs)

use super::Code;
use crate::config::MAX_COLORS;
use std::fmt;

/// Peg feedback for one guess against one secret
///
/// Ordering is by `exact` then `color`, which is the bucket order used by the
/// partitioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact: u8,
    color: u8,
}

/// Error type for invalid feedback values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    Malformed(String),
    TooManyPegs { exact: u8, color: u8, length: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(text) => {
                write!(f, "Invalid feedback '{text}', expected EXACT,COLOR")
            }
            Self::TooManyPegs {
                exact,
                color,
                length,
            } => write!(
                f,
                "Feedback ({exact},{color}) has more pegs than the code length {length}"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Create feedback from peg counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color: u8) -> Self {
        Self { exact, color }
    }

    /// The terminal value for a code of the given length
    #[inline]
    #[must_use]
    pub const fn solved(length: usize) -> Self {
        Self::new(length as u8, 0)
    }

    /// Positions matched exactly
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Additional shared colors in the wrong position
    #[inline]
    #[must_use]
    pub const fn color(self) -> u8 {
        self.color
    }

    /// Check if every position matched
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact as usize == length
    }

    /// Dense index in `0..(length + 1)^2`, ordered like `Ord`
    #[inline]
    #[must_use]
    pub const fn index(self, length: usize) -> usize {
        self.exact as usize * (length + 1) + self.color as usize
    }

    /// Check the peg total against a code length
    ///
    /// # Errors
    /// Returns `FeedbackError::TooManyPegs` if `exact + color > length`.
    pub fn validate(self, length: usize) -> Result<Self, FeedbackError> {
        if usize::from(self.exact) + usize::from(self.color) > length {
            return Err(FeedbackError::TooManyPegs {
                exact: self.exact,
                color: self.color,
                length,
            });
        }
        Ok(self)
    }

    /// Score `guess` against `candidate`
    ///
    /// # Algorithm
    /// 1. Walk both codes position-wise, counting exact matches
    /// 2. Tally the colors left over on each side
    /// 3. Color matches are the per-color minimum of the two tallies
    ///
    /// Both counts are symmetric in the argument order.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::config::GameConfig;
    /// use mastermind_minimax::core::{Code, Feedback};
    ///
    /// let config = GameConfig::default();
    /// let guess = Code::parse("RRGG", &config).unwrap();
    /// let secret = Code::parse("RGBY", &config).unwrap();
    ///
    /// // R matches in place; the remaining G is present elsewhere
    /// assert_eq!(Feedback::score(&guess, &secret), Feedback::new(1, 1));
    /// ```
    #[must_use]
    pub fn score(guess: &Code, candidate: &Code) -> Self {
        debug_assert_eq!(guess.len(), candidate.len(), "codes must share a length");

        let mut exact = 0u8;
        let mut guess_left = [0u8; MAX_COLORS];
        let mut candidate_left = [0u8; MAX_COLORS];

        for (&g, &c) in guess.symbols().iter().zip(candidate.symbols()) {
            if g == c {
                exact += 1;
            } else {
                guess_left[usize::from(g)] += 1;
                candidate_left[usize::from(c)] += 1;
            }
        }

        let color = guess_left
            .iter()
            .zip(&candidate_left)
            .map(|(&g, &c)| g.min(c))
            .sum();

        Self { exact, color }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.exact, self.color)
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse `"E,C"` (also accepts `"(E, C)"` and `"E C"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || FeedbackError::Malformed(s.to_string());

        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = trimmed
            .split([',', ' '])
            .filter(|part| !part.is_empty())
            .map(str::parse::<u8>);

        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(exact)), Some(Ok(color)), None) => Ok(Self::new(exact, color)),
            _ => Err(malformed()),
        }
    }
}
