//! Single-word anagram lookup

use crate::core::{Signature, WordIndex};

/// Find the other vocabulary words that are anagrams of `word`
///
/// Only the bucket of the word's length is consulted. The word itself is
/// excluded by exact (case-sensitive) comparison, so `"Tea"` still lists
/// `"tea"` when both are in the vocabulary. An empty result means the word
/// has no anagrams.
///
/// # Examples
/// ```
/// use anagram_finder::core::WordIndex;
/// use anagram_finder::search::find_word_anagrams;
///
/// let index = WordIndex::build(["cat", "act", "tac", "dog"]);
/// assert_eq!(find_word_anagrams("cat", &index), ["act", "tac"]);
/// assert!(find_word_anagrams("dog", &index).is_empty());
/// ```
#[must_use]
pub fn find_word_anagrams<'a>(word: &str, index: &'a WordIndex) -> Vec<&'a str> {
    let word = word.trim();
    let signature = Signature::of(word);

    index
        .entries(word.chars().count())
        .filter(|&(entry, entry_signature)| entry != word && *entry_signature == signature)
        .map(|(entry, _)| entry)
        .collect()
}
