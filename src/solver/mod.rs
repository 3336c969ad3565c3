//! Mastermind solving algorithms
//!
//! This module contains the minimax search, the strategies built on it, and
//! the game loop that drives them.

mod engine;
mod game;
mod knuth;
pub mod minimax;
pub mod strategy;

pub use engine::Solver;
pub use game::{Game, GameState, SolveRecord};
pub use knuth::select_knuth;
pub use strategy::{KnuthStrategy, RecursiveMinimaxStrategy, Strategy, StrategyType};
