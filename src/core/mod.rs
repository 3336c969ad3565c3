//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with no search logic.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod feedback;
mod space;

pub use code::{Code, CodeError, PALETTE};
pub use feedback::{Feedback, FeedbackError};
pub use space::CodeSpace;

/// Ordered (guess, feedback) pairs of one game, oldest first
pub type History = Vec<(Code, Feedback)>;
