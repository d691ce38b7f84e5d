//! Anagram search algorithms
//!
//! Candidate collection, combination search, and single-word lookup, plus
//! the [`Finder`] facade that binds them to one vocabulary.

mod candidates;
pub mod combinations;
mod engine;
mod single;

pub use candidates::collect_candidates;
pub use combinations::{Combination, CombinationSearch, SearchOptions, StopRule};
pub use engine::{AnagramGroup, Finder};
pub use single::find_word_anagrams;
