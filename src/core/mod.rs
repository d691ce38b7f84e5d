//! Core domain types for anagram matching
//!
//! Pure, deterministic building blocks: character-frequency signatures, the
//! length-indexed vocabulary, and query normalization.

mod index;
mod query;
mod signature;

pub use index::{Buckets, WordIndex};
pub use query::{normalize, substrings};
pub use signature::{Signature, is_anagram};
