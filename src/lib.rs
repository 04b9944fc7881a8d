//! Scrabbler
//!
//! Finds the words in a word list that can be played from a rack of tiles,
//! optionally pinning letters to fixed positions.
//!
//! # Quick Start
//!
//! ```rust
//! use scrabbler::matcher::Matcher;
//!
//! // Tiles C, A, R, T with a T required in the first slot
//! let matcher = Matcher::from_input("cart", Some("t,1")).unwrap();
//!
//! let words = ["cat", "car", "art", "tar", "cart"];
//! assert_eq!(matcher.filter(&words), vec!["tar"]);
//! ```

// Core domain types
pub mod core;

// Matching pipeline
pub mod matcher;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
