//! Single-word lookup command

use crate::search::Finder;

/// Result of looking up one word
pub struct LookupReport {
    pub word: String,
    pub anagrams: Vec<String>,
}

impl LookupReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anagrams.is_empty()
    }
}

/// Find the vocabulary anagrams of a single word
#[must_use]
pub fn run_lookup(finder: &Finder<'_>, word: &str) -> LookupReport {
    let word = word.trim();
    LookupReport {
        word: word.to_string(),
        anagrams: finder
            .word_anagrams(word)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}
