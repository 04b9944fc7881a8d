//! Positional letter constraints
//!
//! A constraint pins a letter to a 1-based slot of the target word. Constraints
//! are given on the command line as comma-delimited `letter,position` pairs,
//! e.g. `"a,1,t,3"`.

use super::tiles::normalize;
use std::fmt;
use std::num::NonZeroUsize;

/// A requirement that `letter` occupy `position` (1-based) in the word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionalConstraint {
    letter: char,
    position: NonZeroUsize,
}

/// Error type for malformed constraint specifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// Tokens must come in `letter,position` pairs
    OddTokenCount(usize),
    /// The letter token of the given pair (1-based) is empty
    EmptyLetter { pair: usize },
    /// The letter token of the given pair holds more than one character
    MultipleLetters { pair: usize, token: String },
    /// The position token of the given pair is not a positive integer
    InvalidPosition { pair: usize, token: String },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddTokenCount(count) => write!(
                f,
                "Invalid constraint format: expected letter,position pairs, got {count} tokens"
            ),
            Self::EmptyLetter { pair } => {
                write!(f, "Invalid constraint format: pair {pair} has no letter")
            }
            Self::MultipleLetters { pair, token } => write!(
                f,
                "Invalid constraint format: pair {pair} letter '{token}' must be a single tile"
            ),
            Self::InvalidPosition { pair, token } => write!(
                f,
                "Invalid constraint format: pair {pair} position '{token}' is not a positive integer"
            ),
        }
    }
}

impl std::error::Error for ConstraintError {}

impl PositionalConstraint {
    /// Create a constraint from an already normalized letter
    #[inline]
    #[must_use]
    pub const fn new(letter: char, position: NonZeroUsize) -> Self {
        Self { letter, position }
    }

    /// The required (normalized) letter
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// The 1-based slot the letter must occupy
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position.get()
    }

    /// Whether the slot exists in a word of `len` characters
    ///
    /// Constraints past the end of a word do not apply to it.
    #[inline]
    #[must_use]
    pub const fn applies_to(&self, len: usize) -> bool {
        self.position.get() <= len
    }

    /// Check a normalized word against this constraint
    ///
    /// Vacuously true when the word is shorter than the constrained slot.
    #[inline]
    #[must_use]
    pub fn is_satisfied_by(&self, word: &[char]) -> bool {
        word.get(self.position.get() - 1)
            .is_none_or(|&c| c == self.letter)
    }
}

impl fmt::Display for PositionalConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.letter, self.position)
    }
}

/// Parse a constraint specification into positional constraints
///
/// `None` or a blank string yields no constraints. Pairs are returned in the
/// order given.
///
/// # Errors
/// Returns `ConstraintError` if:
/// - The number of comma-separated tokens is odd
/// - A letter token is empty or longer than one character
/// - A position token is not a positive integer
///
/// # Examples
/// ```
/// use scrabbler::core::parse_constraints;
///
/// let constraints = parse_constraints(Some("a,1,t,3")).unwrap();
/// assert_eq!(constraints.len(), 2);
/// assert_eq!(constraints[1].letter(), 'T');
/// assert_eq!(constraints[1].position(), 3);
///
/// assert!(parse_constraints(Some("a,1,b")).is_err());
/// assert!(parse_constraints(None).unwrap().is_empty());
/// ```
pub fn parse_constraints(spec: Option<&str>) -> Result<Vec<PositionalConstraint>, ConstraintError> {
    let Some(spec) = spec.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Vec::new());
    };

    let tokens: Vec<&str> = spec.split(',').map(str::trim).collect();
    if tokens.len() % 2 != 0 {
        return Err(ConstraintError::OddTokenCount(tokens.len()));
    }

    tokens
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| parse_pair(i + 1, pair[0], pair[1]))
        .collect()
}

fn parse_pair(
    pair: usize,
    letter_token: &str,
    position_token: &str,
) -> Result<PositionalConstraint, ConstraintError> {
    let letter = match normalize(letter_token).as_slice() {
        [] => return Err(ConstraintError::EmptyLetter { pair }),
        [c] => *c,
        _ => {
            return Err(ConstraintError::MultipleLetters {
                pair,
                token: letter_token.to_string(),
            });
        }
    };

    let position = position_token
        .parse::<usize>()
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| ConstraintError::InvalidPosition {
            pair,
            token: position_token.to_string(),
        })?;

    Ok(PositionalConstraint::new(letter, position))
}
