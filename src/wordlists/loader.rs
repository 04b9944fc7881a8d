//! Word list loading utilities
//!
//! A word list comes either from a user-specified file or from the built-in
//! dictionary. Entries are kept as written; only surrounding whitespace and
//! blank lines are dropped.

use super::WORDS;
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where to read candidate words from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// A text file with one word per line
    File(PathBuf),
    /// The dictionary embedded at build time
    #[default]
    BuiltIn,
}

impl WordSource {
    /// Pick the file source when a path is given, the built-in list otherwise
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::BuiltIn, Self::File)
    }

    /// Load the word list
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source file cannot be read.
    pub fn load(&self) -> io::Result<Vec<String>> {
        let words = match self {
            Self::File(path) => load_from_file(path)?,
            Self::BuiltIn => words_from_slice(WORDS),
        };

        info!("Loaded {} words from {}", words.len(), self.describe());
        Ok(words)
    }

    /// Human-readable name of the source
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::BuiltIn => "built-in list".to_string(),
        }
    }
}

/// Load words from a file
///
/// Returns one entry per non-blank line, trimmed, in file order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use scrabbler::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Split text into word entries, skipping blank lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Convert an embedded string slice to owned entries
///
/// # Examples
/// ```
/// use scrabbler::wordlists::loader::words_from_slice;
/// use scrabbler::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
