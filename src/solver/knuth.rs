//! One-level minimax over the whole code space
//!
//! Knuth's classic selection rule: every code is a possible guess, and the
//! one leaving the smallest worst-case bucket wins.

use super::minimax::largest_bucket;
use crate::core::{Code, CodeSpace};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Select the code with the smallest largest bucket against `candidates`
///
/// Ties prefer codes that are still candidates (they might win this turn),
/// then enumeration order. Returns the guess and its largest bucket size, or
/// `None` for an empty space.
///
/// # Examples
/// ```
/// use mastermind_minimax::config::GameConfig;
/// use mastermind_minimax::core::CodeSpace;
/// use mastermind_minimax::solver::select_knuth;
///
/// let space = CodeSpace::generate(GameConfig::default()).unwrap();
/// let (guess, worst) = select_knuth(&space, &space.all_candidates()).unwrap();
/// assert_eq!(guess.to_string(), "RRGG");
/// assert_eq!(worst, 256);
/// ```
#[must_use]
pub fn select_knuth<'a>(space: &'a CodeSpace, candidates: &[&Code]) -> Option<(&'a Code, usize)> {
    let present: FxHashSet<&Code> = candidates.iter().copied().collect();

    space
        .codes()
        .par_iter()
        .enumerate()
        .map(|(idx, guess)| {
            let worst = largest_bucket(guess, candidates);
            (worst, !present.contains(guess), idx, guess)
        })
        .min_by_key(|&(worst, outsider, idx, _)| (worst, outsider, idx))
        .map(|(worst, _, _, guess)| (guess, worst))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Feedback;
    use crate::solver::minimax::filter_candidates;

    fn classic() -> CodeSpace {
        CodeSpace::generate(GameConfig::default()).unwrap()
    }

    #[test]
    fn prefers_candidates_on_ties() {
        let space = classic();
        let all = space.all_candidates();
        let opener = Code::parse("RRGG", space.config()).unwrap();
        let candidates = filter_candidates(&all, &opener, Feedback::new(0, 4));

        let (guess, worst) = select_knuth(&space, &candidates).unwrap();
        assert!(worst < candidates.len());
        for code in space.codes() {
            assert!(largest_bucket(code, &candidates) >= worst);
        }
        if candidates.iter().any(|c| largest_bucket(c, &candidates) == worst) {
            assert!(candidates.contains(&guess));
        }
    }

    #[test]
    fn single_candidate_is_selected() {
        let space = classic();
        let target = &space.codes()[100];

        let (guess, worst) = select_knuth(&space, &[target]).unwrap();
        assert_eq!(guess, target);
        assert_eq!(worst, 1);
    }
}
