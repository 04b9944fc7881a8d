//! Word lists for tile matching
//!
//! Provides the built-in dictionary compiled into the binary and loading of
//! user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_clean_entries() {
        for &word in WORDS {
            assert!(!word.is_empty(), "Empty entry in built-in list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn common_words_present() {
        for word in ["cat", "cart", "tar", "quiz"] {
            assert!(WORDS.contains(&word), "'{word}' missing from built-in list");
        }
    }
}
