//! Main anagram finder interface

use super::{CombinationSearch, SearchOptions, collect_candidates, find_word_anagrams};
use crate::core::WordIndex;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// A set of vocabulary words that are all anagrams of each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramGroup<'a> {
    /// Sorted lowercase letters shared by every member
    pub key: String,
    pub words: Vec<&'a str>,
}

/// Anagram finder bound to one vocabulary
///
/// Holds the index by reference; every query starts from scratch, so no
/// state carries over between calls.
pub struct Finder<'a> {
    index: &'a WordIndex,
}

impl<'a> Finder<'a> {
    #[must_use]
    pub const fn new(index: &'a WordIndex) -> Self {
        Self { index }
    }

    #[must_use]
    pub const fn index(&self) -> &'a WordIndex {
        self.index
    }

    /// Vocabulary words that are anagrams of some substring of `query`
    #[must_use]
    pub fn candidates(&self, query: &str) -> Vec<&'a str> {
        collect_candidates(query, self.index)
    }

    /// Search `candidates` (usually from [`Finder::candidates`]) for
    /// combinations that spell `query`
    #[must_use]
    pub fn search<'c>(
        &self,
        query: &str,
        candidates: &'c [&'a str],
        options: SearchOptions,
    ) -> CombinationSearch<'c, 'a> {
        CombinationSearch::new(query, candidates, options)
    }

    /// Other vocabulary words that are anagrams of `word`
    #[must_use]
    pub fn word_anagrams(&self, word: &str) -> Vec<&'a str> {
        find_word_anagrams(word, self.index)
    }

    /// Every anagram class of at least `min_size` words in the vocabulary
    ///
    /// Length buckets are processed in parallel. Groups are ordered by size
    /// (largest first), then by key.
    #[must_use]
    pub fn anagram_groups(&self, min_size: usize) -> Vec<AnagramGroup<'a>> {
        let lengths: Vec<usize> = self.index.lengths().collect();

        let mut groups: Vec<AnagramGroup<'a>> = lengths
            .par_iter()
            .flat_map_iter(|&len| {
                let mut classes: FxHashMap<String, Vec<&'a str>> = FxHashMap::default();
                for (word, signature) in self.index.entries(len) {
                    classes.entry(signature.key()).or_default().push(word);
                }
                classes
                    .into_iter()
                    .filter(|(_, words)| words.len() >= min_size.max(1))
                    .map(|(key, words)| AnagramGroup { key, words })
                    .collect::<Vec<_>>()
            })
            .collect();

        groups.sort_by(|a, b| {
            b.words
                .len()
                .cmp(&a.words.len())
                .then_with(|| a.key.cmp(&b.key))
        });
        log::debug!("Found {} anagram groups of {min_size}+ words", groups.len());
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::StopRule;

    fn setup_index() -> WordIndex {
        WordIndex::build([
            "cat", "act", "tac", "dog", "god", "night", "thing", "owl", "low", "night owl",
        ])
    }

    #[test]
    fn finder_word_anagrams() {
        let index = setup_index();
        let finder = Finder::new(&index);
        assert_eq!(finder.word_anagrams("cat"), ["act", "tac"]);
        assert!(finder.word_anagrams("zzz").is_empty());
        assert_eq!(finder.index().len(), 9);
    }

    #[test]
    fn finder_phrase_search() {
        let index = setup_index();
        let finder = Finder::new(&index);
        let candidates = finder.candidates("Thing Low");
        let results: Vec<String> = finder
            .search("Thing Low", &candidates, SearchOptions::new(None, StopRule::Exhaustive))
            .map(|c| c.to_string())
            .collect();

        assert!(results.contains(&"thing owl".to_string()));
        assert!(results.contains(&"night low".to_string()));
        for result in &results {
            assert_eq!(result.split(' ').count(), 2);
        }
    }

    #[test]
    fn groups_are_sorted_by_size_then_key() {
        let index = setup_index();
        let finder = Finder::new(&index);
        let groups = finder.anagram_groups(2);

        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["act", "dgo", "ghint", "low"]);
        assert_eq!(groups[0].words, ["cat", "act", "tac"]);
    }

    #[test]
    fn groups_respect_min_size() {
        let index = setup_index();
        let finder = Finder::new(&index);
        assert_eq!(finder.anagram_groups(3).len(), 1);
        assert!(finder.anagram_groups(4).is_empty());

        // Every word forms at least a singleton group
        let all: usize = finder.anagram_groups(0).iter().map(|g| g.words.len()).sum();
        assert_eq!(all, index.len());
    }
}
