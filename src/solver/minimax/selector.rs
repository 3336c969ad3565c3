//! Minimax-based guess selection
//!
//! Picks the guess with the lowest worst-case score from a bounded pool.

use super::calculator::{Search, worst_case_score};
use crate::config::SearchLimits;
use crate::core::{Code, CodeSpace};
use crate::error::SolveError;
use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Choose the next guess for a candidate set
///
/// - First guess of a game: the fixed opener ([`CodeSpace::opening_guess`])
/// - One or two candidates: the first candidate
/// - Otherwise: the best-scoring entry of [`guess_pool`] via [`select_best_guess`]
///
/// # Errors
/// Returns `SolveError::ContradictoryHistory` (with an empty history) if
/// `candidates` is empty.
///
/// # Examples
/// ```
/// use mastermind_minimax::config::{GameConfig, SearchLimits};
/// use mastermind_minimax::core::CodeSpace;
/// use mastermind_minimax::solver::minimax::choose_guess;
///
/// let space = CodeSpace::generate(GameConfig::default()).unwrap();
/// let candidates = space.all_candidates();
///
/// let opener = choose_guess(&candidates, &space, true, &SearchLimits::default()).unwrap();
/// assert_eq!(opener.to_string(), "RRGG");
/// ```
pub fn choose_guess<'a>(
    candidates: &[&'a Code],
    space: &'a CodeSpace,
    is_first_guess: bool,
    limits: &SearchLimits,
) -> Result<&'a Code, SolveError> {
    limits.validate()?;

    if is_first_guess {
        return Ok(space.opening_guess());
    }

    match candidates {
        [] => Err(SolveError::ContradictoryHistory { history: vec![] }),
        [only] | [only, _] => Ok(*only),
        _ => {
            let pool = guess_pool(candidates, space, limits);
            let (guess, score) = select_best_guess(&pool, candidates, limits)
                .ok_or_else(|| SolveError::ContradictoryHistory { history: vec![] })?;
            debug!(
                "selected {guess} from {} pool guesses against {} candidates (worst case {score})",
                pool.len(),
                candidates.len()
            );
            Ok(guess)
        }
    }
}

/// Guesses considered for a candidate set
///
/// The candidates themselves, followed, when there are more than
/// `widen_threshold` of them, by the first `widen_prefix` codes of the space
/// that are not candidates. Those probes can split the set more evenly even
/// though they cannot win this turn.
#[must_use]
pub fn guess_pool<'a>(
    candidates: &[&'a Code],
    space: &'a CodeSpace,
    limits: &SearchLimits,
) -> Vec<&'a Code> {
    let mut pool = candidates.to_vec();

    if candidates.len() > limits.widen_threshold {
        let present: FxHashSet<&Code> = candidates.iter().copied().collect();
        pool.extend(
            space
                .codes()
                .iter()
                .take(limits.widen_prefix)
                .filter(|code| !present.contains(code)),
        );
    }

    pool
}

/// Select the pool entry with the lowest worst-case score
///
/// Ties go to the earliest pool entry. Sequential mode shares one memo table
/// across the pool and stops at a score of 1; parallel mode gives each entry a
/// private table and reduces by (score, pool index), so it is deterministic
/// too but may settle on a different guess than sequential mode.
///
/// Returns the guess and its score, or `None` if the pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    pool: &[&'a Code],
    candidates: &[&'a Code],
    limits: &SearchLimits,
) -> Option<(&'a Code, u32)> {
    let deadline = limits.time_budget.map(|budget| Instant::now() + budget);

    if limits.parallel {
        return pool
            .par_iter()
            .enumerate()
            .map(|(idx, &guess)| {
                let mut search = Search::new(*limits, deadline);
                let score = worst_case_score(guess, candidates, 0, &mut search);
                (score, idx, guess)
            })
            .min_by_key(|&(score, idx, _)| (score, idx))
            .map(|(score, _, guess)| (guess, score));
    }

    let mut search = Search::new(*limits, deadline);
    let mut best: Option<(&'a Code, u32)> = None;

    for &guess in pool {
        let score = worst_case_score(guess, candidates, 0, &mut search);

        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((guess, score));
        }
        if score == 1 {
            break;
        }
    }

    trace!(
        "memo held {} sets after {} hits",
        search.memo_len(),
        search.memo_hits()
    );

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, GameConfig};
    use crate::core::Feedback;
    use crate::solver::minimax::filter_candidates;

    fn classic() -> CodeSpace {
        CodeSpace::generate(GameConfig::default()).unwrap()
    }

    fn code(text: &str) -> Code {
        Code::parse(text, &GameConfig::default()).unwrap()
    }

    fn shallow() -> SearchLimits {
        SearchLimits::with_depth(1)
    }

    #[test]
    fn first_guess_is_opener() {
        let space = classic();
        let guess = choose_guess(&space.all_candidates(), &space, true, &shallow()).unwrap();
        assert_eq!(guess, &code("RRGG"));
    }

    #[test]
    fn empty_candidates_is_contradiction() {
        let space = classic();
        assert!(matches!(
            choose_guess(&[], &space, false, &shallow()),
            Err(SolveError::ContradictoryHistory { .. })
        ));
    }

    #[test]
    fn tiny_sets_pick_first_candidate() {
        let space = classic();
        let a = &space.codes()[7];
        let b = &space.codes()[3];

        assert_eq!(choose_guess(&[a], &space, false, &shallow()).unwrap(), a);
        assert_eq!(choose_guess(&[a, b], &space, false, &shallow()).unwrap(), a);
    }

    #[test]
    fn pool_widens_only_for_large_sets() {
        let space = classic();
        let limits = SearchLimits::default();

        let small: Vec<&Code> = space.codes()[500..505].iter().collect();
        assert_eq!(guess_pool(&small, &space, &limits).len(), 5);

        let large: Vec<&Code> = space.codes()[500..530].iter().collect();
        let pool = guess_pool(&large, &space, &limits);
        assert_eq!(pool.len(), 50);
        assert_eq!(&pool[..30], large.as_slice());
        assert_eq!(pool[30], &space.codes()[0]);
    }

    #[test]
    fn pool_skips_codes_already_present() {
        let space = classic();
        let limits = SearchLimits::default();

        let candidates: Vec<&Code> = space.codes()[..15].iter().collect();
        let pool = guess_pool(&candidates, &space, &limits);
        assert_eq!(pool.len(), 20);

        let unique: FxHashSet<&Code> = pool.iter().copied().collect();
        assert_eq!(unique.len(), pool.len());
    }

    #[test]
    fn selection_after_opener_is_deterministic() {
        let space = classic();
        let all = space.all_candidates();
        let opener = code("RRGG");
        let candidates = filter_candidates(&all, &opener, Feedback::new(1, 1));
        assert!(candidates.len() > 2);

        let first = choose_guess(&candidates, &space, false, &shallow()).unwrap();
        let second = choose_guess(&candidates, &space, false, &shallow()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn chosen_guess_has_minimum_score() {
        let space = classic();
        let all = space.all_candidates();
        let candidates = filter_candidates(&all, &code("RRGG"), Feedback::new(2, 0));
        let limits = shallow();

        let pool = guess_pool(&candidates, &space, &limits);
        let (best, best_score) = select_best_guess(&pool, &candidates, &limits).unwrap();

        let mut search = Search::new(limits, None);
        assert_eq!(worst_case_score(best, &candidates, 0, &mut search), best_score);

        for &guess in &pool {
            let mut search = Search::new(limits, None);
            assert!(worst_case_score(guess, &candidates, 0, &mut search) >= best_score);
        }
    }

    #[test]
    fn parallel_selection_is_deterministic() {
        let space = classic();
        let all = space.all_candidates();
        let candidates = filter_candidates(&all, &code("RRGG"), Feedback::new(0, 2));
        let limits = SearchLimits {
            parallel: true,
            ..shallow()
        };

        let pool = guess_pool(&candidates, &space, &limits);
        let first = select_best_guess(&pool, &candidates, &limits).unwrap();
        let second = select_best_guess(&pool, &candidates, &limits).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_pool_selects_nothing() {
        let space = classic();
        let candidates = space.all_candidates();
        assert!(select_best_guess(&[], &candidates, &shallow()).is_none());
    }

    #[test]
    fn invalid_limits_rejected_before_search() {
        let space = classic();
        let all = space.all_candidates();
        let candidates = filter_candidates(&all, &code("RRGG"), Feedback::new(1, 1));
        let limits = SearchLimits {
            pool_limit: 0,
            ..shallow()
        };

        for is_first_guess in [true, false] {
            assert!(matches!(
                choose_guess(&candidates, &space, is_first_guess, &limits),
                Err(SolveError::InvalidConfiguration(ConfigError::ZeroPoolLimit))
            ));
        }
    }
}
