//! Candidate collection
//!
//! Finds every vocabulary word that is an anagram of some substring of the query.

use crate::core::{Signature, WordIndex, normalize, substrings};

/// Collect candidate words for a query
///
/// The query is normalized (lowercased, whitespace removed), then every
/// substring is matched against the index bucket of its length. A word is
/// emitted once per substring it matches, so the same word can appear several
/// times; duplicates are kept so that a word can fill more than one position
/// in a combination.
///
/// # Examples
/// ```
/// use anagram_finder::core::WordIndex;
/// use anagram_finder::search::collect_candidates;
///
/// let index = WordIndex::build(["eat", "tea", "ate", "dog"]);
/// let candidates = collect_candidates("Eat Tea", &index);
/// assert!(candidates.contains(&"tea"));
/// assert!(!candidates.contains(&"dog"));
/// ```
#[must_use]
pub fn collect_candidates<'a>(query: &str, index: &'a WordIndex) -> Vec<&'a str> {
    let search_term = normalize(query);
    let mut candidates = Vec::new();

    for substring in substrings(&search_term) {
        let length = substring.chars().count();
        let signature = Signature::of(substring);

        candidates.extend(
            index
                .entries(length)
                .filter(|(_, word_signature)| **word_signature == signature)
                .map(|(word, _)| word),
        );
    }

    log::debug!(
        "Collected {} candidates for '{search_term}'",
        candidates.len()
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_candidates() {
        let index = WordIndex::build(["a", "ab"]);
        assert!(collect_candidates("", &index).is_empty());
        assert!(collect_candidates("   ", &index).is_empty());
    }

    #[test]
    fn phrase_candidates_include_all_three_letter_anagrams() {
        let index = WordIndex::build(["eat", "tea", "ate"]);
        let candidates = collect_candidates("eat tea", &index);

        for word in ["eat", "tea", "ate"] {
            assert!(candidates.contains(&word), "missing '{word}'");
        }
    }

    #[test]
    fn duplicates_are_kept_per_substring() {
        let index = WordIndex::build(["eat", "tea", "ate"]);
        // "eatea" has three 3-letter substrings ("eat", "ate", "tea"),
        // each matching all three words.
        let candidates = collect_candidates("eatea", &index);
        assert_eq!(candidates.len(), 9);
        assert_eq!(candidates.iter().filter(|&&w| w == "eat").count(), 3);
    }

    #[test]
    fn order_follows_substrings_then_bucket() {
        let index = WordIndex::build(["ab", "ba", "a", "b"]);
        let candidates = collect_candidates("ab", &index);
        // substrings: "a", "ab", "b"
        assert_eq!(candidates, ["a", "ab", "ba", "b"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let index = WordIndex::build(["Dog", "GOD"]);
        let candidates = collect_candidates("dOg", &index);
        assert_eq!(candidates, ["Dog", "GOD"]);
    }

    #[test]
    fn no_matching_lengths() {
        let index = WordIndex::build(["abcdef"]);
        assert!(collect_candidates("abc", &index).is_empty());
    }
}
