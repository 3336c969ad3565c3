//! Depth-bounded minimax scoring for Mastermind guesses
//!
//! A score is the number of guesses, counting the one being scored, needed in
//! the worst case to finish the game. Scores past the depth bound are estimated
//! from bucket sizes, and nested sets only try a prefix of their members as
//! guesses, so the values are approximations rather than an exact minimax.

use super::partition::partition;
use crate::config::SearchLimits;
use crate::core::Code;
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::time::Instant;

/// Search state owned by one top-level guess selection
///
/// Holds the caps and the memo table. The memo is keyed by a sorted snapshot
/// of a candidate set, so two keys collide only for identical sets. Scores
/// depend on the depth they were computed at, which is why a table must never
/// outlive the selection that filled it.
pub struct Search<'a> {
    limits: SearchLimits,
    deadline: Option<Instant>,
    memo: FxHashMap<Box<[&'a Code]>, u32>,
    memo_hits: usize,
}

impl<'a> Search<'a> {
    /// Fresh search state with an optional wall-clock deadline
    #[must_use]
    pub fn new(limits: SearchLimits, deadline: Option<Instant>) -> Self {
        Self {
            limits,
            deadline,
            memo: FxHashMap::default(),
            memo_hits: 0,
        }
    }

    /// Caps this search runs under
    #[inline]
    #[must_use]
    pub const fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Number of memoized candidate sets
    #[inline]
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Number of lookups answered from the memo
    #[inline]
    #[must_use]
    pub const fn memo_hits(&self) -> usize {
        self.memo_hits
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Estimated guesses to finish a set of `n` candidates without searching it
///
/// A monotone step function: ≤1 → 1, ≤6 → 2, ≤20 → 3, ≤100 → 4, otherwise 5.
#[must_use]
pub const fn estimate_guesses(n: usize) -> u32 {
    match n {
        0..=1 => 1,
        2..=6 => 2,
        7..=20 => 3,
        21..=100 => 4,
        _ => 5,
    }
}

/// Worst-case guesses needed if `guess` is played against `candidates`
///
/// # Strategy
/// Partition the candidates by feedback, then score each bucket:
/// - the solved bucket costs 1 (this guess wins)
/// - a single remaining code costs 2 (it is guessed next)
/// - at the depth bound, or past the deadline, cost is 1 + [`estimate_guesses`]
/// - otherwise cost is 1 + [`best_score`] of the bucket one level deeper
///
/// Returns the maximum bucket cost.
///
/// # Examples
/// ```
/// use mastermind_minimax::config::{GameConfig, SearchLimits};
/// use mastermind_minimax::core::Code;
/// use mastermind_minimax::solver::minimax::{Search, worst_case_score};
///
/// let config = GameConfig::default();
/// let codes: Vec<Code> = ["RRGG", "RGBY", "BBBB"]
///     .iter()
///     .map(|t| Code::parse(t, &config).unwrap())
///     .collect();
/// let candidates: Vec<&Code> = codes.iter().collect();
///
/// let mut search = Search::new(SearchLimits::default(), None);
/// // RRGG wins outright or leaves exactly one code behind
/// assert_eq!(worst_case_score(&codes[0], &candidates, 0, &mut search), 2);
/// ```
pub fn worst_case_score<'a>(
    guess: &Code,
    candidates: &[&'a Code],
    depth: u32,
    search: &mut Search<'a>,
) -> u32 {
    let length = guess.len();
    let mut worst = 0;

    for (feedback, bucket) in partition(guess, candidates) {
        let branch = if feedback.is_solved(length) {
            1
        } else if bucket.len() == 1 {
            2
        } else if depth >= search.limits.max_depth || search.expired() {
            1 + estimate_guesses(bucket.len())
        } else {
            memoized_best_score(&bucket, depth + 1, search).saturating_add(1)
        };

        worst = worst.max(branch);
    }

    worst
}

/// Fewest worst-case guesses achievable for `candidates`, as far as the caps allow
///
/// One code needs 1 guess and two codes need 2. Larger sets try the first
/// `pool_limit` candidates as guesses and keep the minimum, stopping early at
/// a score of 2.
pub fn best_score<'a>(candidates: &[&'a Code], depth: u32, search: &mut Search<'a>) -> u32 {
    match candidates.len() {
        0 | 1 => return 1,
        2 => return 2,
        _ => {}
    }

    let pool_size = candidates.len().min(search.limits.pool_limit);
    let mut best = u32::MAX;

    for &guess in &candidates[..pool_size] {
        let score = worst_case_score(guess, candidates, depth, search);
        best = best.min(score);

        if score <= 2 {
            break;
        }
    }

    best
}

fn memoized_best_score<'a>(bucket: &[&'a Code], depth: u32, search: &mut Search<'a>) -> u32 {
    let key: Cow<'_, [&'a Code]> = if bucket.is_sorted() {
        Cow::Borrowed(bucket)
    } else {
        let mut sorted = bucket.to_vec();
        sorted.sort_unstable();
        Cow::Owned(sorted)
    };

    if let Some(&score) = search.memo.get(&*key) {
        search.memo_hits += 1;
        return score;
    }

    let score = best_score(&key, depth, search);
    search.memo.insert(key.into_owned().into_boxed_slice(), score);
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::CodeSpace;
    use std::time::Duration;

    fn code(text: &str) -> Code {
        Code::parse(text, &GameConfig::default()).unwrap()
    }

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|t| code(t)).collect()
    }

    #[test]
    fn estimate_is_monotone_step() {
        assert_eq!(estimate_guesses(0), 1);
        assert_eq!(estimate_guesses(1), 1);
        assert_eq!(estimate_guesses(2), 2);
        assert_eq!(estimate_guesses(6), 2);
        assert_eq!(estimate_guesses(7), 3);
        assert_eq!(estimate_guesses(20), 3);
        assert_eq!(estimate_guesses(21), 4);
        assert_eq!(estimate_guesses(100), 4);
        assert_eq!(estimate_guesses(101), 5);
        assert_eq!(estimate_guesses(5000), 5);

        assert!((0..500).all(|n| estimate_guesses(n) <= estimate_guesses(n + 1)));
    }

    #[test]
    fn best_score_trivial_sets() {
        let owned = codes(&["RGBY", "YBGR"]);
        let mut search = Search::new(SearchLimits::default(), None);

        assert_eq!(best_score(&[&owned[0]], 0, &mut search), 1);
        assert_eq!(best_score(&[&owned[0], &owned[1]], 0, &mut search), 2);
    }

    #[test]
    fn single_candidate_guessed_directly() {
        let owned = codes(&["RGBY"]);
        let candidates: Vec<&Code> = owned.iter().collect();
        let mut search = Search::new(SearchLimits::default(), None);

        assert_eq!(worst_case_score(&owned[0], &candidates, 0, &mut search), 1);
        // A different guess leaves the code for the following turn
        assert_eq!(worst_case_score(&code("RRRR"), &candidates, 0, &mut search), 2);
    }

    #[test]
    fn uninformative_guess_scores_worse() {
        let owned = codes(&["RRGG", "RGRG", "RGGR", "GRRG"]);
        let candidates: Vec<&Code> = owned.iter().collect();
        let mut search = Search::new(SearchLimits::default(), None);

        // BBBB yields (0,0) for all four, so it learns nothing
        let blind = worst_case_score(&code("BBBB"), &candidates, 0, &mut search);
        let informed = worst_case_score(&owned[0], &candidates, 0, &mut search);
        assert!(informed < blind);
        assert_eq!(blind, 1 + best_score(&candidates, 1, &mut search));
    }

    #[test]
    fn depth_bound_uses_estimate() {
        let space = CodeSpace::generate(GameConfig::default()).unwrap();
        let candidates = space.all_candidates();
        let mut search = Search::new(SearchLimits::with_depth(0), None);

        // The largest RRGG bucket holds 256 codes, estimated as 5 more guesses
        assert_eq!(worst_case_score(&code("RRGG"), &candidates, 0, &mut search), 6);
        assert_eq!(search.memo_len(), 0);
    }

    #[test]
    fn expired_deadline_falls_back_to_estimate() {
        let space = CodeSpace::generate(GameConfig::default()).unwrap();
        let candidates = space.all_candidates();
        let limits = SearchLimits {
            time_budget: Some(Duration::ZERO),
            ..SearchLimits::default()
        };
        let mut search = Search::new(limits, Some(Instant::now()));

        assert_eq!(worst_case_score(&code("RRGG"), &candidates, 0, &mut search), 6);
        assert_eq!(search.memo_len(), 0);
    }

    #[test]
    fn memo_is_reused_for_repeated_sets() {
        let space = CodeSpace::generate(GameConfig::default()).unwrap();
        let guess = code("RRGG");
        let all = space.all_candidates();
        let candidates = partition(&guess, &all).get(crate::core::Feedback::new(2, 0)).to_vec();

        let mut search = Search::new(SearchLimits::with_depth(2), None);
        let first = worst_case_score(candidates[0], &candidates, 0, &mut search);
        let stored = search.memo_len();
        assert!(stored > 0);

        let hits_before = search.memo_hits();
        let second = worst_case_score(candidates[0], &candidates, 0, &mut search);
        assert_eq!(first, second);
        assert_eq!(search.memo_len(), stored);
        assert!(search.memo_hits() > hits_before);
    }

    #[test]
    fn unsorted_bucket_shares_key_with_sorted() {
        let owned = codes(&["RGGR", "RRGG", "RGRG", "GRRG"]);
        let unsorted: Vec<&Code> = owned.iter().collect();
        let mut sorted = unsorted.clone();
        sorted.sort_unstable();

        let mut search = Search::new(SearchLimits::default(), None);
        let a = memoized_best_score(&unsorted, 1, &mut search);
        let hits = search.memo_hits();
        let b = memoized_best_score(&sorted, 1, &mut search);
        assert_eq!(a, b);
        assert_eq!(search.memo_hits(), hits + 1);
    }

    #[test]
    fn score_never_below_one() {
        let space = CodeSpace::generate(GameConfig::new(3, 3, 10).unwrap()).unwrap();
        let candidates = space.all_candidates();
        let mut search = Search::new(SearchLimits::with_depth(2), None);

        for guess in space.codes() {
            let score = worst_case_score(guess, &candidates, 0, &mut search);
            assert!(score >= 2, "{guess} cannot finish 27 codes in one guess");
        }
    }
}
