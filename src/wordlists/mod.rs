//! Vocabulary sources
//!
//! Provides the embedded default word list and file-based word lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::errors::AnagramError;
use std::fmt;
use std::path::PathBuf;

/// Where a vocabulary comes from when the cache is (re)built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The word list compiled into the binary
    Builtin,
    /// A newline-delimited word file
    File(PathBuf),
}

impl WordSource {
    /// Resolve a `--wordlist` argument: `builtin` or a file path
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "builtin" | "default" => Self::Builtin,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Read every word from this source
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` if a word file cannot be read, and
    /// `EmptyVocabulary` if the source holds no words.
    pub fn load(&self) -> Result<Vec<String>, AnagramError> {
        let words = match self {
            Self::Builtin => loader::words_from_slice(WORDS),
            Self::File(path) => loader::load_from_file(path)
                .map_err(|e| AnagramError::source_unavailable(self, e))?,
        };

        if words.is_empty() {
            return Err(AnagramError::EmptyVocabulary {
                source_name: self.to_string(),
            });
        }
        log::debug!("Loaded {} words from {self}", words.len());
        Ok(words)
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin word list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
