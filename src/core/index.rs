//! Vocabulary indexed by word length
//!
//! Words are bucketed by their character count so that candidate lookups only
//! compare signatures against words of the right length.

use super::Signature;
use std::collections::BTreeMap;

/// Bucket shape shared with the on-disk cache: word length to words of that length
pub type Buckets = BTreeMap<usize, Vec<String>>;

/// One length bucket, with signatures precomputed alongside the words
#[derive(Debug, Clone, Default)]
struct Bucket {
    words: Vec<String>,
    signatures: Vec<Signature>,
}

impl Bucket {
    fn push(&mut self, word: String) {
        self.signatures.push(Signature::of(&word));
        self.words.push(word);
    }
}

/// Read-only vocabulary partitioned by word length
///
/// Built once per session and passed by reference into every search.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    buckets: BTreeMap<usize, Bucket>,
    total: usize,
}

impl WordIndex {
    /// Build an index from a flat vocabulary
    ///
    /// Entries are trimmed; empty entries and entries containing interior
    /// whitespace (multi-word phrases) are skipped. Order within each bucket
    /// follows the input order.
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::core::WordIndex;
    ///
    /// let index = WordIndex::build(["a", "ab", "abc", "ice cream"]);
    /// assert_eq!(index.lookup(2), ["ab"]);
    /// assert!(index.lookup(4).is_empty());
    /// assert_eq!(index.len(), 3);
    /// ```
    pub fn build<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for entry in vocabulary {
            let word = entry.as_ref().trim();
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                continue;
            }
            index.insert(word.to_string());
        }
        log::debug!(
            "Indexed {} words across {} lengths",
            index.total,
            index.buckets.len()
        );
        index
    }

    /// Rebuild an index from the cached bucket shape
    ///
    /// Words are re-bucketed by their actual length, so a bucket stored under
    /// the wrong key cannot leak into lookups.
    #[must_use]
    pub fn from_buckets(buckets: Buckets) -> Self {
        Self::build(buckets.into_values().flatten())
    }

    /// Convert back into the cacheable bucket shape
    #[must_use]
    pub fn to_buckets(&self) -> Buckets {
        self.buckets
            .iter()
            .map(|(&len, bucket)| (len, bucket.words.clone()))
            .collect()
    }

    fn insert(&mut self, word: String) {
        let len = word.chars().count();
        self.buckets.entry(len).or_default().push(word);
        self.total += 1;
    }

    /// Words of exactly `length` characters
    ///
    /// Returns an empty slice when no such words exist.
    #[must_use]
    pub fn lookup(&self, length: usize) -> &[String] {
        self.buckets
            .get(&length)
            .map_or(&[], |bucket| bucket.words.as_slice())
    }

    /// Words of exactly `length` characters paired with their signatures
    pub(crate) fn entries(&self, length: usize) -> impl Iterator<Item = (&str, &Signature)> {
        self.buckets.get(&length).into_iter().flat_map(|bucket| {
            bucket
                .words
                .iter()
                .map(String::as_str)
                .zip(bucket.signatures.iter())
        })
    }

    /// All word lengths present in the index, ascending
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    /// Total number of indexed words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_by_length() {
        let index = WordIndex::build(["a", "ab", "abc"]);
        assert_eq!(index.lookup(1), ["a"]);
        assert_eq!(index.lookup(2), ["ab"]);
        assert_eq!(index.lookup(3), ["abc"]);
        assert_eq!(index.lengths().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn missing_length_is_empty() {
        let index = WordIndex::build(["a", "ab", "abc"]);
        assert!(index.lookup(4).is_empty());
        assert!(index.lookup(0).is_empty());
        assert_eq!(index.entries(4).count(), 0);
    }

    #[test]
    fn preserves_input_order_within_bucket() {
        let index = WordIndex::build(["cat", "dog", "act", "tac"]);
        assert_eq!(index.lookup(3), ["cat", "dog", "act", "tac"]);
    }

    #[test]
    fn skips_phrases_and_blanks() {
        let index = WordIndex::build(["night owl", "", "   ", "owl", " night "]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup(3), ["owl"]);
        assert_eq!(index.lookup(5), ["night"]);
        assert!(index.lookup(9).is_empty());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let index = WordIndex::build(["café", "cafe"]);
        assert_eq!(index.lookup(4), ["café", "cafe"]);
        assert!(index.lookup(5).is_empty());
    }

    #[test]
    fn every_word_lands_in_its_length_bucket() {
        let words = ["a", "to", "tea", "team", "steam", "master"];
        let index = WordIndex::build(words);
        assert_eq!(index.len(), words.len());
        for len in index.lengths() {
            for word in index.lookup(len) {
                assert_eq!(word.chars().count(), len);
            }
        }
    }

    #[test]
    fn entries_carry_matching_signatures() {
        let index = WordIndex::build(["Tea", "eat"]);
        let entries: Vec<_> = index.entries(3).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "Tea");
        assert_eq!(entries[0].1, &Signature::of("tea"));
        assert_eq!(entries[0].1, entries[1].1);
    }

    #[test]
    fn buckets_round_trip() {
        let index = WordIndex::build(["a", "ab", "ba", "abc"]);
        let buckets = index.to_buckets();
        assert_eq!(buckets.get(&2), Some(&vec!["ab".to_string(), "ba".to_string()]));

        let restored = WordIndex::from_buckets(buckets);
        assert_eq!(restored.len(), 4);
        assert_eq!(restored.lookup(2), ["ab", "ba"]);
    }

    #[test]
    fn from_buckets_rebuckets_misplaced_words() {
        let mut buckets = Buckets::new();
        buckets.insert(2, vec!["abc".to_string()]);
        let index = WordIndex::from_buckets(buckets);
        assert!(index.lookup(2).is_empty());
        assert_eq!(index.lookup(3), ["abc"]);
    }

    #[test]
    fn empty_vocabulary() {
        let index = WordIndex::build(Vec::<String>::new());
        assert!(index.is_empty());
        assert_eq!(index.lengths().count(), 0);
    }
}
