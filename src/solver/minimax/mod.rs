//! Recursive minimax search for Mastermind
//!
//! Scores a guess by the worst-case number of guesses still needed across
//! every feedback it could receive, recursing into each feedback bucket up to
//! a depth bound.

mod calculator;
mod partition;
mod selector;

pub use calculator::{Search, best_score, estimate_guesses, worst_case_score};
pub use partition::{Partition, filter_candidates, largest_bucket, partition};
pub use selector::{choose_guess, guess_pool, select_best_guess};
