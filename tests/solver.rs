//! End-to-end solving behavior across the public API

use mastermind_minimax::config::{ConfigError, GameConfig, SearchLimits};
use mastermind_minimax::core::{Code, CodeSpace, Feedback};
use mastermind_minimax::error::SolveError;
use mastermind_minimax::solver::minimax::{choose_guess, filter_candidates, partition};
use mastermind_minimax::solver::{KnuthStrategy, RecursiveMinimaxStrategy, Solver, Strategy};
use rayon::prelude::*;

fn classic() -> CodeSpace {
    CodeSpace::generate(GameConfig::default()).unwrap()
}

fn code(text: &str) -> Code {
    Code::parse(text, &GameConfig::default()).unwrap()
}

fn recursive(depth: u32) -> RecursiveMinimaxStrategy {
    RecursiveMinimaxStrategy::new(SearchLimits::with_depth(depth))
}

/// Solve every secret in parallel and return the guess counts in order
fn solve_all<S: Strategy + Sync>(solver: &Solver<S>) -> Vec<usize> {
    solver
        .space()
        .codes()
        .par_iter()
        .map(|secret| {
            let record = solver.solve(secret).unwrap();
            assert!(record.success, "{secret} failed: {:?}", record.failure);
            record.guesses_used
        })
        .collect()
}

#[test]
fn reference_secret_rgby() {
    let space = classic();
    let solver = Solver::new(recursive(1), &space);

    let record = solver.solve(&code("RGBY")).unwrap();

    assert!(record.success);
    assert!(record.guesses_used <= 10);
    assert_eq!(record.history[0], (code("RRGG"), Feedback::new(1, 1)));
    assert_eq!(record.candidate_counts[0], 1296);
    assert!(record.candidate_counts[1] < 1296);
    assert_eq!(record.history.last().map(|(g, _)| g), Some(&code("RGBY")));
}

#[test]
fn single_color_secret_within_five() {
    let space = classic();
    let solver = Solver::new(recursive(1), &space);

    let record = solver.solve(&code("BBBB")).unwrap();
    assert!(record.success);
    assert!(record.guesses_used <= 5, "took {}", record.guesses_used);
}

#[test]
fn reference_secrets_at_default_limits() {
    let space = classic();
    let solver = Solver::new(RecursiveMinimaxStrategy::default(), &space);

    let rgby = solver.solve(&code("RGBY")).unwrap();
    assert!(rgby.success);
    assert_eq!(rgby.history[0], (code("RRGG"), Feedback::new(1, 1)));
    assert!(rgby.guesses_used <= 10);

    let bbbb = solver.solve(&code("BBBB")).unwrap();
    assert!(bbbb.success);
    assert!(bbbb.guesses_used <= 5, "took {}", bbbb.guesses_used);
}

#[test]
fn every_secret_solved_at_depth_zero() {
    let space = classic();
    let solver = Solver::new(recursive(0), &space);

    let counts = solve_all(&solver);
    assert_eq!(counts.len(), 1296);
    assert!(counts.iter().all(|&n| (1..=10).contains(&n)));
}

#[test]
fn every_secret_solved_by_knuth() {
    let space = classic();
    let solver = Solver::new(KnuthStrategy, &space);

    let counts = solve_all(&solver);
    assert!(counts.iter().all(|&n| n <= 10));
    // Only the opener itself is found on the first guess
    assert_eq!(counts.iter().filter(|&&n| n == 1).count(), 1);
}

#[test]
#[ignore = "searches every game at full depth; run with --ignored in release mode"]
fn every_secret_solved_at_default_depth() {
    let space = classic();
    let solver = Solver::new(RecursiveMinimaxStrategy::default(), &space);

    let counts = solve_all(&solver);
    assert!(counts.iter().all(|&n| n <= 10));
}

#[test]
fn candidates_shrink_every_turn() {
    let space = classic();
    let solver = Solver::new(recursive(1), &space);

    for secret in ["POYB", "GGRR", "YYYO", "BRPG"] {
        let record = solver.solve(&code(secret)).unwrap();
        for pair in record.candidate_counts.windows(2) {
            assert!(pair[1] < pair[0] || pair[0] == 1, "{secret}: {pair:?}");
        }
    }
}

#[test]
fn partition_covers_candidates_after_filtering() {
    let space = classic();
    let all = space.all_candidates();
    let opener = code("RRGG");

    for (feedback, bucket) in partition(&opener, &all).iter() {
        let filtered = filter_candidates(&all, &opener, feedback);
        assert_eq!(filtered.as_slice(), bucket);
    }
}

#[test]
fn selection_is_deterministic() {
    let space = classic();
    let all = space.all_candidates();
    let candidates = filter_candidates(&all, &code("RRGG"), Feedback::new(0, 1));
    let limits = SearchLimits::with_depth(1);

    let first = choose_guess(&candidates, &space, false, &limits).unwrap();
    for _ in 0..3 {
        assert_eq!(choose_guess(&candidates, &space, false, &limits).unwrap(), first);
    }

    let parallel = SearchLimits {
        parallel: true,
        ..limits
    };
    let a = choose_guess(&candidates, &space, false, &parallel).unwrap();
    let b = choose_guess(&candidates, &space, false, &parallel).unwrap();
    assert_eq!(a, b);
}

#[test]
fn contradictory_history_is_reported() {
    let space = classic();
    let solver = Solver::new(recursive(1), &space);
    // Two reds plus three greens do not fit in four positions
    let history = vec![
        (code("RRRR"), Feedback::new(2, 0)),
        (code("GGGG"), Feedback::new(3, 0)),
    ];

    match solver.next_guess(&history) {
        Err(SolveError::ContradictoryHistory { history: carried }) => assert_eq!(carried, history),
        other => panic!("expected contradiction, got {other:?}"),
    }
}

#[test]
fn guess_limit_is_enforced() {
    let space = CodeSpace::generate(GameConfig::new(6, 4, 1).unwrap()).unwrap();
    let solver = Solver::new(recursive(1), &space);

    let record = solver.solve(&code("RGBY")).unwrap();
    assert!(!record.success);
    match record.failure {
        Some(SolveError::ExhaustedGuesses { limit, history }) => {
            assert_eq!(limit, 1);
            assert_eq!(history.len(), 1);
        }
        other => panic!("expected exhausted guesses, got {other:?}"),
    }
}

#[test]
fn invalid_configurations_rejected() {
    assert_eq!(GameConfig::new(6, 0, 10), Err(ConfigError::ZeroCodeLength));
    assert_eq!(GameConfig::new(0, 4, 10), Err(ConfigError::ZeroAlphabet));
    assert_eq!(GameConfig::new(17, 4, 10), Err(ConfigError::TooManyColors(17)));
    assert_eq!(GameConfig::new(6, 4, 0), Err(ConfigError::ZeroGuessLimit));

    assert_eq!(
        GameConfig::new(1, 300, 10),
        Err(ConfigError::CodeTooLong(300))
    );

    let limits = SearchLimits {
        pool_limit: 0,
        ..SearchLimits::default()
    };
    assert_eq!(limits.validate(), Err(ConfigError::ZeroPoolLimit));
}

#[test]
fn invalid_search_limits_fail_the_game() {
    let space = classic();
    let limits = SearchLimits {
        pool_limit: 0,
        ..SearchLimits::with_depth(1)
    };
    let solver = Solver::new(RecursiveMinimaxStrategy::new(limits), &space);

    let record = solver.solve(&code("RGBY")).unwrap();
    assert!(!record.success);
    assert!(record.history.is_empty());
    assert!(matches!(
        record.failure,
        Some(SolveError::InvalidConfiguration(ConfigError::ZeroPoolLimit))
    ));
    assert!(matches!(
        solver.next_guess(&[(code("RRGG"), Feedback::new(1, 1))]),
        Err(SolveError::InvalidConfiguration(ConfigError::ZeroPoolLimit))
    ));
}

#[test]
fn longest_single_color_code_solves_at_once() {
    let config = GameConfig::new(1, usize::from(u8::MAX), 10).unwrap();
    let space = CodeSpace::generate(config).unwrap();
    let solver = Solver::new(recursive(1), &space);

    let record = solver.solve(&space.codes()[0]).unwrap();
    assert!(record.success);
    assert_eq!(record.guesses_used, 1);
    assert!(record.history[0].1.is_solved(config.code_length));
}

#[test]
fn other_game_shapes_solve() {
    for (colors, length) in [(2, 3), (4, 3), (8, 2), (1, 4)] {
        let space = CodeSpace::generate(GameConfig::new(colors, length, 10).unwrap()).unwrap();
        let solver = Solver::new(recursive(2), &space);

        let counts = solve_all(&solver);
        assert_eq!(counts.len(), space.len());
        assert!(counts.iter().all(|&n| n <= 10));
    }
}
