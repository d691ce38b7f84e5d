//! Anagram Finder
//!
//! Finds single-word anagrams and multi-word phrase anagrams against a
//! vocabulary indexed by word length.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_finder::core::WordIndex;
//! use anagram_finder::search::{Finder, SearchOptions};
//!
//! let index = WordIndex::build(["night", "thing", "owl", "low"]);
//! let finder = Finder::new(&index);
//!
//! // Single word
//! assert_eq!(finder.word_anagrams("night"), ["thing"]);
//!
//! // Phrase
//! let candidates = finder.candidates("Night Owl");
//! for combination in finder.search("Night Owl", &candidates, SearchOptions::default()) {
//!     println!("{combination}");
//! }
//! ```

// Core domain types
pub mod core;

// Anagram search algorithms
pub mod search;

// Word lists
pub mod wordlists;

// Vocabulary cache
pub mod cache;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod errors;
pub mod logging;
