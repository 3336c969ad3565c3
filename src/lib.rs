//! Mastermind Solver
//!
//! A Mastermind code-breaker that scores guesses with a memoized,
//! depth-bounded minimax search over feedback partitions.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_minimax::config::{GameConfig, SearchLimits};
//! use mastermind_minimax::core::{Code, CodeSpace, Feedback};
//! use mastermind_minimax::solver::{RecursiveMinimaxStrategy, Solver};
//!
//! let space = CodeSpace::generate(GameConfig::default()).unwrap();
//!
//! // Score a guess against a secret
//! let guess = Code::parse("RRGG", space.config()).unwrap();
//! let secret = Code::parse("RGBY", space.config()).unwrap();
//! assert_eq!(Feedback::score(&guess, &secret), Feedback::new(1, 1));
//!
//! // Solve it
//! let solver = Solver::new(RecursiveMinimaxStrategy::new(SearchLimits::with_depth(1)), &space);
//! let record = solver.solve(&secret).unwrap();
//! assert!(record.success);
//! ```

// Game shape and search caps
pub mod config;

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
