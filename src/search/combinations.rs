//! Combination search
//!
//! Tries combinations of candidate words of increasing size and reports those
//! whose letters, taken together, are exactly the letters of the query.

use crate::core::{Signature, normalize};
use std::fmt;

/// When to stop enumerating combinations of one size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopRule {
    /// Move on to the next size as soon as one combination reaches the full
    /// query length, whether or not it is an anagram. Fast, but can hide other
    /// valid combinations of the same size.
    #[default]
    FirstFullLength,
    /// Enumerate every combination of every size
    Exhaustive,
}

/// Search configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of words per combination; `None` or `Some(0)` means no limit
    pub max_words: Option<usize>,
    pub stop_rule: StopRule,
}

impl SearchOptions {
    #[must_use]
    pub const fn new(max_words: Option<usize>, stop_rule: StopRule) -> Self {
        Self {
            max_words,
            stop_rule,
        }
    }

    /// Effective maximum combination size for a query of `query_len` characters
    ///
    /// No combination can usefully hold more words than the query has
    /// characters, so that is both the default and the ceiling.
    #[must_use]
    pub const fn word_limit(&self, query_len: usize) -> usize {
        match self.max_words {
            Some(n) if n > 0 && n <= query_len => n,
            _ => query_len,
        }
    }
}

/// An accepted selection of candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination<'a> {
    words: Vec<&'a str>,
}

impl<'a> Combination<'a> {
    #[must_use]
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The member words joined without separators
    #[must_use]
    pub fn concatenated(&self) -> String {
        self.words.concat()
    }
}

impl fmt::Display for Combination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

/// Lazy enumeration of the combinations of candidates that spell the query
///
/// Sizes are visited in increasing order, and combinations of one size in
/// lexicographic index order, so results are deterministic. Nothing is
/// computed until the iterator is advanced, and dropping it abandons the rest
/// of the search.
///
/// # Examples
/// ```
/// use anagram_finder::search::{CombinationSearch, SearchOptions};
///
/// let candidates = ["dirty", "dormitory", "room"];
/// let results: Vec<String> = CombinationSearch::new("Dirty Room", &candidates, SearchOptions::default())
///     .map(|c| c.to_string())
///     .collect();
/// assert_eq!(results, ["dormitory", "dirty room"]);
/// ```
pub struct CombinationSearch<'c, 'a> {
    candidates: &'c [&'a str],
    lengths: Vec<usize>,
    target: Signature,
    target_len: usize,
    max_size: usize,
    stop_rule: StopRule,
    size: usize,
    indices: Vec<usize>,
    started: bool,
}

impl<'c, 'a> CombinationSearch<'c, 'a> {
    /// Prepare a search of `candidates` against `query`
    ///
    /// The query is normalized the same way candidates were collected.
    #[must_use]
    pub fn new(query: &str, candidates: &'c [&'a str], options: SearchOptions) -> Self {
        let search_term = normalize(query);
        let target_len = search_term.chars().count();
        let max_size = options.word_limit(target_len).min(candidates.len());

        log::debug!(
            "Searching {} candidates for '{search_term}' with up to {max_size} words ({:?})",
            candidates.len(),
            options.stop_rule
        );

        Self {
            candidates,
            lengths: candidates.iter().map(|w| w.chars().count()).collect(),
            target: Signature::of(&search_term),
            target_len,
            max_size,
            stop_rule: options.stop_rule,
            size: 1,
            indices: Vec::new(),
            started: false,
        }
    }

    /// Largest combination size this search will try
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Step `indices` to the next combination of the current size
    ///
    /// Returns false once every combination of this size has been produced.
    fn advance(&mut self) -> bool {
        let n = self.candidates.len();
        let k = self.size;

        if !self.started {
            self.started = true;
            self.indices = (0..k).collect();
            return k <= n;
        }

        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }

    fn next_size(&mut self) {
        self.size += 1;
        self.started = false;
    }
}

impl<'a> Iterator for CombinationSearch<'_, 'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.size <= self.max_size {
            if !self.advance() {
                self.next_size();
                continue;
            }

            let total: usize = self.indices.iter().map(|&i| self.lengths[i]).sum();
            if total != self.target_len {
                continue;
            }

            let words: Vec<&'a str> = self.indices.iter().map(|&i| self.candidates[i]).collect();
            let accepted = Signature::of(&words.concat()) == self.target;

            if self.stop_rule == StopRule::FirstFullLength {
                self.next_size();
            }
            if accepted {
                return Some(Combination { words });
            }
        }
        None
    }
}
