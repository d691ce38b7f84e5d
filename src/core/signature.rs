//! Character-frequency signatures
//!
//! A Signature maps each character of a string to the number of times it occurs.
//! Two strings are anagrams of each other exactly when their signatures are equal.

use rustc_hash::FxHashMap;
use std::fmt;

/// Character-frequency fingerprint of a string
///
/// Characters are lowercased before counting, so `Signature::of("Tea")`
/// equals `Signature::of("eat")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    counts: FxHashMap<char, u32>,
    len: usize,
}

impl Signature {
    /// Compute the signature of a string
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::core::Signature;
    ///
    /// let sig = Signature::of("Letter");
    /// assert_eq!(sig.count('t'), 2);
    /// assert_eq!(sig.count('l'), 1);
    /// assert_eq!(sig.count('z'), 0);
    /// assert_eq!(sig, Signature::of("TRETLE"));
    /// ```
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut len = 0;
        for ch in text.chars().flat_map(char::to_lowercase) {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// Number of occurrences of `ch` (expected to be lowercase)
    #[inline]
    #[must_use]
    pub fn count(&self, ch: char) -> u32 {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Total number of characters counted
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct characters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Canonical key: the counted characters in sorted order
    ///
    /// Equal signatures always produce equal keys, which makes the key usable
    /// wherever a hashable stand-in for the signature is needed.
    #[must_use]
    pub fn key(&self) -> String {
        let mut chars: Vec<(char, u32)> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        chars.sort_unstable_by_key(|&(c, _)| c);

        let mut key = String::with_capacity(self.len);
        for (ch, count) in chars {
            for _ in 0..count {
                key.push(ch);
            }
        }
        key
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Check whether two strings are anagrams of each other
///
/// Case-insensitive; every other character (including spaces and punctuation)
/// is counted as-is.
///
/// # Examples
/// ```
/// use anagram_finder::core::is_anagram;
///
/// assert!(is_anagram("listen", "Silent"));
/// assert!(!is_anagram("listen", "listens"));
/// ```
#[must_use]
pub fn is_anagram(a: &str, b: &str) -> bool {
    Signature::of(a) == Signature::of(b)
}
