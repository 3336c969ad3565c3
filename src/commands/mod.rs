//! Command implementations

pub mod analyze;
pub mod solve;
pub mod suggest;
pub mod test_all;

pub use analyze::{AnalysisResult, OutcomeRow, analyze_guess};
pub use solve::{GuessStep, SolveResult, random_secret, solve_code};
pub use suggest::{Suggestion, parse_history, parse_history_entry, suggest_next};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
