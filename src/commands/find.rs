//! Word finding command
//!
//! Runs one search of a word list for a rack of tiles.

use crate::core::{ConstraintError, PositionalConstraint};
use crate::matcher::{LengthPolicy, Matcher};
use log::warn;
use std::time::{Duration, Instant};

/// Configuration for a single search
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub tiles: String,
    pub constraints: Option<String>,
    pub max_length: Option<usize>,
    pub policy: LengthPolicy,
}

impl SearchConfig {
    #[must_use]
    pub fn new(tiles: impl Into<String>) -> Self {
        Self {
            tiles: tiles.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_constraints(mut self, constraints: Option<String>) -> Self {
        self.constraints = constraints;
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: LengthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse the raw input into a configured matcher
    ///
    /// # Errors
    ///
    /// Returns `ConstraintError` if the constraint string is malformed.
    pub fn matcher(&self) -> Result<Matcher, ConstraintError> {
        Ok(Matcher::from_input(&self.tiles, self.constraints.as_deref())?
            .with_policy(self.policy)
            .with_max_length(self.max_length))
    }
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct FindResult {
    /// Normalized tiles as searched
    pub tiles: String,
    pub constraints: Vec<PositionalConstraint>,
    pub matches: Vec<String>,
    pub words_searched: usize,
    pub length_budget: usize,
    pub policy: LengthPolicy,
    pub duration: Duration,
}

impl FindResult {
    /// Number of matching words
    #[must_use]
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    /// The word list held no entries, so nothing was searched
    #[must_use]
    pub const fn source_was_empty(&self) -> bool {
        self.words_searched == 0
    }
}

/// Find every word in `words` playable with the configured tiles
///
/// An empty word list is reported as zero matches without running the filter.
///
/// # Errors
///
/// Returns `ConstraintError` if the constraint string is malformed; no matching
/// is attempted in that case.
///
/// # Examples
/// ```
/// use scrabbler::commands::{SearchConfig, find_words};
///
/// let words: Vec<String> = ["cat", "car", "art", "tar", "cart"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// let config = SearchConfig::new("cart").with_constraints(Some("t,1".to_string()));
///
/// let result = find_words(&config, &words).unwrap();
/// assert_eq!(result.matches, vec!["tar"]);
/// ```
pub fn find_words(config: &SearchConfig, words: &[String]) -> Result<FindResult, ConstraintError> {
    let matcher = config.matcher()?;
    let start = Instant::now();

    let matches = if words.is_empty() {
        warn!("Word list is empty, nothing to search");
        Vec::new()
    } else {
        matcher
            .filter(words)
            .into_iter()
            .map(ToString::to_string)
            .collect()
    };

    Ok(FindResult {
        tiles: matcher.tiles().to_string(),
        constraints: matcher.constraints().to_vec(),
        matches,
        words_searched: words.len(),
        length_budget: matcher.length_budget(),
        policy: matcher.policy(),
        duration: start.elapsed(),
    })
}
