//! The space of all codes for a game shape
//!
//! Generated once per solve and shared read-only by every component.

use super::{Code, Feedback};
use crate::config::{ConfigError, GameConfig};
use rustc_hash::FxHashSet;

/// Every code of length L over K colors, in lexicographic order
#[derive(Debug, Clone)]
pub struct CodeSpace {
    config: GameConfig,
    codes: Vec<Code>,
}

impl CodeSpace {
    /// Enumerate all K^L codes
    ///
    /// The order is lexicographic over color indices so that pool truncation
    /// and tie-breaking downstream are reproducible.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::config::GameConfig;
    /// use mastermind_minimax::core::CodeSpace;
    ///
    /// let space = CodeSpace::generate(GameConfig::default()).unwrap();
    /// assert_eq!(space.len(), 1296);
    /// assert_eq!(space.codes()[0].to_string(), "RRRR");
    /// assert_eq!(space.codes()[1].to_string(), "RRRG");
    /// ```
    pub fn generate(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let length = config.code_length;
        let base = config.alphabet_size;
        let total = config.space_size();

        let codes = (0..total)
            .map(|mut n| {
                let mut symbols = vec![0u8; length];
                for slot in symbols.iter_mut().rev() {
                    *slot = (n % base) as u8;
                    n /= base;
                }
                Code::from_symbols(symbols)
            })
            .collect();

        Ok(Self { config, codes })
    }

    /// The game shape this space was generated for
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All codes in enumeration order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Borrowed view of every code, the starting candidate set
    #[must_use]
    pub fn all_candidates(&self) -> Vec<&Code> {
        self.codes.iter().collect()
    }

    /// Number of codes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false for a validated configuration
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Position of a code in enumeration order
    ///
    /// Returns `None` if the code does not fit this space.
    #[must_use]
    pub fn index_of(&self, code: &Code) -> Option<usize> {
        if code.len() != self.config.code_length {
            return None;
        }

        code.symbols().iter().try_fold(0usize, |acc, &symbol| {
            let symbol = usize::from(symbol);
            (symbol < self.config.alphabet_size).then(|| acc * self.config.alphabet_size + symbol)
        })
    }

    /// The fixed opening guess
    ///
    /// The first half of the positions (rounded down) use the first color and
    /// the rest use the second, giving `RRGG` for the classic game. With a
    /// single color every position uses it.
    #[must_use]
    pub fn opening_guess(&self) -> &Code {
        let length = self.config.code_length;
        let second = u8::from(self.config.alphabet_size > 1);
        let symbols: Vec<u8> = (0..length)
            .map(|pos| if pos < length / 2 { 0 } else { second })
            .collect();

        let idx = self
            .index_of(&Code::from_symbols(symbols))
            .unwrap_or_default();
        &self.codes[idx]
    }

    /// Codes whose colors first appear in index order (`RRGB` but not `GGRB`)
    ///
    /// Every code equals one of these up to a relabeling of colors, and
    /// relabeling both sides of a comparison leaves the feedback unchanged.
    pub fn canonical_codes(&self) -> impl Iterator<Item = &Code> {
        self.codes.iter().filter(|code| {
            let mut next_new = 0u8;
            code.symbols().iter().all(|&symbol| {
                if symbol > next_new {
                    false
                } else {
                    if symbol == next_new {
                        next_new += 1;
                    }
                    true
                }
            })
        })
    }

    /// Every feedback value the evaluator can produce in this space, sorted
    ///
    /// Derived by scoring each canonical guess against every code rather than
    /// from a closed-form rule, so it follows whatever the evaluator does. For
    /// the classic game this yields 14 outcomes and omits `(3,1)`.
    #[must_use]
    pub fn feedback_outcomes(&self) -> Vec<Feedback> {
        let mut seen = FxHashSet::default();
        for guess in self.canonical_codes() {
            for code in &self.codes {
                seen.insert(Feedback::score(guess, code));
            }
        }

        let mut outcomes: Vec<Feedback> = seen.into_iter().collect();
        outcomes.sort_unstable();
        outcomes
    }
}
