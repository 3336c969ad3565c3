//! Grouping candidates by the feedback they produce against a guess

use crate::core::{Code, Feedback};

/// Candidates bucketed by feedback against one guess
///
/// Buckets are non-empty, disjoint, ordered by feedback, and each keeps the
/// input order of its members. Their union is exactly the input set.
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    buckets: Vec<(Feedback, Vec<&'a Code>)>,
}

impl<'a> Partition<'a> {
    /// Non-empty buckets in feedback order
    pub fn iter(&self) -> impl Iterator<Item = (Feedback, &[&'a Code])> {
        self.buckets
            .iter()
            .map(|(feedback, codes)| (*feedback, codes.as_slice()))
    }

    /// Number of distinct feedback values observed
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when partitioning an empty candidate set
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Members of one bucket, empty if the feedback never occurred
    #[must_use]
    pub fn get(&self, feedback: Feedback) -> &[&'a Code] {
        self.buckets
            .iter()
            .find(|(f, _)| *f == feedback)
            .map_or(&[], |(_, codes)| codes.as_slice())
    }

    /// Size of the largest bucket (worst-case remaining candidates)
    #[must_use]
    pub fn largest(&self) -> usize {
        self.buckets
            .iter()
            .map(|(_, codes)| codes.len())
            .max()
            .unwrap_or(0)
    }

    /// Total number of partitioned candidates
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, codes)| codes.len()).sum()
    }
}

impl<'a> IntoIterator for Partition<'a> {
    type Item = (Feedback, Vec<&'a Code>);
    type IntoIter = std::vec::IntoIter<(Feedback, Vec<&'a Code>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

/// Group `candidates` by their feedback against `guess`
///
/// # Examples
/// ```
/// use mastermind_minimax::config::GameConfig;
/// use mastermind_minimax::core::{Code, Feedback};
/// use mastermind_minimax::solver::minimax::partition;
///
/// let config = GameConfig::default();
/// let codes: Vec<Code> = ["RRGG", "RGRG", "RGGR", "GRRG"]
///     .iter()
///     .map(|t| Code::parse(t, &config).unwrap())
///     .collect();
/// let candidates: Vec<&Code> = codes.iter().collect();
///
/// let split = partition(&codes[0], &candidates);
/// assert_eq!(split.total(), 4);
/// assert_eq!(split.get(Feedback::solved(4)).len(), 1);
/// ```
#[must_use]
pub fn partition<'a>(guess: &Code, candidates: &[&'a Code]) -> Partition<'a> {
    let length = guess.len();
    let width = length + 1;
    let mut slots: Vec<Vec<&'a Code>> = vec![Vec::new(); width * width];

    for &candidate in candidates {
        let feedback = Feedback::score(guess, candidate);
        slots[feedback.index(length)].push(candidate);
    }

    let buckets = slots
        .into_iter()
        .enumerate()
        .filter(|(_, codes)| !codes.is_empty())
        .map(|(idx, codes)| {
            let feedback = Feedback::new((idx / width) as u8, (idx % width) as u8);
            (feedback, codes)
        })
        .collect();

    Partition { buckets }
}

/// Size of the largest bucket without materializing the buckets
#[must_use]
pub fn largest_bucket(guess: &Code, candidates: &[&Code]) -> usize {
    let length = guess.len();
    let mut counts = vec![0usize; (length + 1) * (length + 1)];

    for &candidate in candidates {
        counts[Feedback::score(guess, candidate).index(length)] += 1;
    }

    counts.into_iter().max().unwrap_or(0)
}

/// Candidates that would have produced `feedback` against `guess`
///
/// This is exactly one bucket of [`partition`].
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &[&'a Code],
    guess: &Code,
    feedback: Feedback,
) -> Vec<&'a Code> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| Feedback::score(guess, candidate) == feedback)
        .collect()
}
