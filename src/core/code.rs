//! Mastermind code representation
//!
//! A Code is an immutable sequence of color indices. Colors print as letters
//! from a fixed palette whose first six entries are the classic R, G, B, Y, O, P.

use crate::config::{GameConfig, MAX_COLORS};
use std::fmt;

/// Display letters for color indices 0..16
pub const PALETTE: [char; MAX_COLORS] = [
    'R', 'G', 'B', 'Y', 'O', 'P', 'W', 'K', 'C', 'M', 'N', 'T', 'V', 'S', 'A', 'L',
];

/// An ordered sequence of color indices
///
/// Equality is position-wise and ordering is lexicographic over indices, which
/// matches the enumeration order of the code space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Box<[u8]>);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, actual: usize },
    ColorOutOfRange { color: u8, alphabet_size: usize },
    UnknownLetter(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Code must have exactly {expected} symbols, got {actual}")
            }
            Self::ColorOutOfRange {
                color,
                alphabet_size,
            } => write!(
                f,
                "Color {color} is outside the alphabet of {alphabet_size} colors"
            ),
            Self::UnknownLetter(ch) => write!(f, "Unknown color letter '{ch}'"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from color indices, validated against a game shape
    ///
    /// # Errors
    /// Returns `CodeError` if the length differs from `config.code_length` or a
    /// color index is not below `config.alphabet_size`.
    pub fn new(symbols: impl Into<Vec<u8>>, config: &GameConfig) -> Result<Self, CodeError> {
        let code = Self(symbols.into().into_boxed_slice());
        code.validate(config)?;
        Ok(code)
    }

    /// Check that this code fits a game shape
    ///
    /// # Errors
    /// Returns `CodeError` if the length differs from `config.code_length` or a
    /// color index is not below `config.alphabet_size`.
    pub fn validate(&self, config: &GameConfig) -> Result<(), CodeError> {
        if self.len() != config.code_length {
            return Err(CodeError::InvalidLength {
                expected: config.code_length,
                actual: self.len(),
            });
        }

        match self
            .symbols()
            .iter()
            .find(|&&c| usize::from(c) >= config.alphabet_size)
        {
            Some(&color) => Err(CodeError::ColorOutOfRange {
                color,
                alphabet_size: config.alphabet_size,
            }),
            None => Ok(()),
        }
    }

    /// Build a code without validation; callers guarantee the shape
    pub(crate) fn from_symbols(symbols: Vec<u8>) -> Self {
        Self(symbols.into_boxed_slice())
    }

    /// Parse a code from palette letters such as `"RGBY"` or `"r g b y"`
    ///
    /// Letters are case-insensitive; spaces and commas are ignored.
    ///
    /// # Errors
    /// Returns `CodeError` for letters outside the palette or the alphabet, and
    /// for a wrong number of symbols.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::config::GameConfig;
    /// use mastermind_minimax::core::Code;
    ///
    /// let config = GameConfig::default();
    /// let code = Code::parse("rgby", &config).unwrap();
    /// assert_eq!(code.symbols(), &[0, 1, 2, 3]);
    /// assert_eq!(code.to_string(), "RGBY");
    ///
    /// assert!(Code::parse("RGBX", &config).is_err());
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self, CodeError> {
        let symbols = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| {
                let upper = c.to_ascii_uppercase();
                PALETTE
                    .iter()
                    .position(|&p| p == upper)
                    .map(|idx| idx as u8)
                    .ok_or(CodeError::UnknownLetter(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::new(symbols, config)
    }

    /// Color indices, one per position
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for a zero-length code, which a validated config never produces
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in self.symbols() {
            write!(f, "{}", PALETTE[usize::from(symbol)])?;
        }
        Ok(())
    }
}
