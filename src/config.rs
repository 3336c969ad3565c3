//! Game and search configuration
//!
//! Both structs are plain data with validated constructors. Nothing here
//! touches the search itself; the solver borrows a validated config.

use std::fmt;
use std::time::Duration;

/// Largest supported alphabet (one palette letter per color)
pub const MAX_COLORS: usize = 16;

/// Longest supported code (peg counts are stored as `u8`)
pub const MAX_CODE_LENGTH: usize = u8::MAX as usize;

/// Largest code space the solver will enumerate
pub const MAX_SPACE_SIZE: usize = 1 << 24;

/// Shape of one game: alphabet size, code length and guess limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of distinct colors (K)
    pub alphabet_size: usize,
    /// Symbols per code (L)
    pub code_length: usize,
    /// Guesses allowed before the game is declared failed
    pub max_guesses: usize,
}

/// Error type for rejected configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroCodeLength,
    CodeTooLong(usize),
    ZeroAlphabet,
    TooManyColors(usize),
    ZeroGuessLimit,
    ZeroPoolLimit,
    SpaceTooLarge { alphabet_size: usize, code_length: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCodeLength => write!(f, "Code length must be at least 1"),
            Self::CodeTooLong(n) => {
                write!(f, "Code length supports at most {MAX_CODE_LENGTH} pegs, got {n}")
            }
            Self::ZeroAlphabet => write!(f, "Alphabet must contain at least 1 color"),
            Self::TooManyColors(n) => {
                write!(f, "Alphabet supports at most {MAX_COLORS} colors, got {n}")
            }
            Self::ZeroGuessLimit => write!(f, "Guess limit must be at least 1"),
            Self::ZeroPoolLimit => write!(f, "Guess pool limit must be at least 1"),
            Self::SpaceTooLarge {
                alphabet_size,
                code_length,
            } => write!(
                f,
                "{alphabet_size}^{code_length} codes exceeds the supported maximum of {MAX_SPACE_SIZE}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if any dimension is zero, the code is longer than
    /// [`MAX_CODE_LENGTH`], the alphabet exceeds [`MAX_COLORS`], or the code
    /// space would exceed [`MAX_SPACE_SIZE`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::config::GameConfig;
    ///
    /// let config = GameConfig::new(6, 4, 10).unwrap();
    /// assert_eq!(config.space_size(), 1296);
    ///
    /// assert!(GameConfig::new(6, 0, 10).is_err());
    /// ```
    pub fn new(
        alphabet_size: usize,
        code_length: usize,
        max_guesses: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            alphabet_size,
            code_length,
            max_guesses,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the solver relies on
    ///
    /// # Errors
    /// See [`GameConfig::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::ZeroCodeLength);
        }
        if self.code_length > MAX_CODE_LENGTH {
            return Err(ConfigError::CodeTooLong(self.code_length));
        }
        if self.alphabet_size == 0 {
            return Err(ConfigError::ZeroAlphabet);
        }
        if self.alphabet_size > MAX_COLORS {
            return Err(ConfigError::TooManyColors(self.alphabet_size));
        }
        if self.max_guesses == 0 {
            return Err(ConfigError::ZeroGuessLimit);
        }
        if checked_space_size(self.alphabet_size, self.code_length)
            .is_none_or(|size| size > MAX_SPACE_SIZE)
        {
            return Err(ConfigError::SpaceTooLarge {
                alphabet_size: self.alphabet_size,
                code_length: self.code_length,
            });
        }
        Ok(())
    }

    /// Number of codes in the space (K^L)
    #[must_use]
    pub fn space_size(&self) -> usize {
        checked_space_size(self.alphabet_size, self.code_length).unwrap_or(usize::MAX)
    }
}

impl Default for GameConfig {
    /// Classic Mastermind: 6 colors, 4 pegs, 10 guesses
    fn default() -> Self {
        Self {
            alphabet_size: 6,
            code_length: 4,
            max_guesses: 10,
        }
    }
}

fn checked_space_size(alphabet_size: usize, code_length: usize) -> Option<usize> {
    let exp = u32::try_from(code_length).ok()?;
    alphabet_size.checked_pow(exp)
}

/// Tunable caps of the minimax search
///
/// These caps trade exactness for speed. With any of them in effect the
/// scores are approximations, not a proven minimax optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Recursion depth at which bucket sizes are estimated instead of searched
    pub max_depth: u32,
    /// Guesses tried per nested candidate set
    pub pool_limit: usize,
    /// Candidate count above which the top-level pool is widened
    pub widen_threshold: usize,
    /// How many codes from the front of the space widen the pool
    pub widen_prefix: usize,
    /// Evaluate top-level pool entries on the rayon thread pool
    pub parallel: bool,
    /// Wall-clock budget per selection; buckets reached later are estimated
    pub time_budget: Option<Duration>,
}

impl SearchLimits {
    /// Limits with the given depth and every other field at its default
    #[must_use]
    pub fn with_depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// # Errors
    /// Returns `ConfigError::ZeroPoolLimit` if `pool_limit` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_limit == 0 {
            return Err(ConfigError::ZeroPoolLimit);
        }
        Ok(())
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: 5,
            pool_limit: 50,
            widen_threshold: 10,
            widen_prefix: 20,
            parallel: false,
            time_budget: None,
        }
    }
}
