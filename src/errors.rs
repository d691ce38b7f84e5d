//! Error types for anagram_finder
//!
//! Absence of a match is never an error: empty length buckets and lookups
//! with no anagrams are reported as empty results. Errors only cover invalid
//! user input and a vocabulary that cannot be obtained.

use std::fmt;

/// Errors raised at the boundary of the anagram engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnagramError {
    /// A value supplied by the user could not be accepted
    InvalidInput { value: String, reason: String },
    /// The vocabulary could not be read, built, or loaded
    SourceUnavailable { source_name: String, reason: String },
    /// The vocabulary source was readable but contained no usable words
    EmptyVocabulary { source_name: String },
}

impl AnagramError {
    pub(crate) fn source_unavailable(
        source_name: impl fmt::Display,
        reason: impl fmt::Display,
    ) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for AnagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { value, reason } => {
                write!(f, "Invalid input '{value}': {reason}")
            }
            Self::SourceUnavailable {
                source_name,
                reason,
            } => write!(f, "Vocabulary source '{source_name}' unavailable: {reason}"),
            Self::EmptyVocabulary { source_name } => {
                write!(f, "Vocabulary source '{source_name}' contains no usable words")
            }
        }
    }
}

impl std::error::Error for AnagramError {}

/// Parse a maximum word count supplied by the user
///
/// Accepts any non-negative integer; `0` means "no limit".
///
/// # Errors
/// Returns `AnagramError::InvalidInput` for negative or non-numeric values.
///
/// # Examples
/// ```
/// use anagram_finder::errors::parse_word_count;
///
/// assert_eq!(parse_word_count(" 3 ").unwrap(), 3);
/// assert_eq!(parse_word_count("0").unwrap(), 0);
/// assert!(parse_word_count("-1").is_err());
/// assert!(parse_word_count("three").is_err());
/// ```
pub fn parse_word_count(input: &str) -> Result<usize, AnagramError> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n < 0 => Err(AnagramError::InvalidInput {
            value: trimmed.to_string(),
            reason: "word count cannot be negative".to_string(),
        }),
        Ok(n) => usize::try_from(n).map_err(|_| AnagramError::InvalidInput {
            value: trimmed.to_string(),
            reason: "word count is too large".to_string(),
        }),
        Err(_) => Err(AnagramError::InvalidInput {
            value: trimmed.to_string(),
            reason: "word count must be a whole number".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_counts() {
        assert_eq!(parse_word_count("0"), Ok(0));
        assert_eq!(parse_word_count("12"), Ok(12));
        assert_eq!(parse_word_count("  4\n"), Ok(4));
    }

    #[test]
    fn rejects_negative() {
        assert!(matches!(
            parse_word_count("-2"),
            Err(AnagramError::InvalidInput { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric() {
        for input in ["", "abc", "1.5", "3 words"] {
            assert!(
                matches!(parse_word_count(input), Err(AnagramError::InvalidInput { .. })),
                "'{input}' should be rejected"
            );
        }
    }

    #[test]
    fn display_messages() {
        let err = parse_word_count("-1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input '-1': word count cannot be negative"
        );

        let err = AnagramError::source_unavailable("words.bin", "not found");
        assert_eq!(
            err.to_string(),
            "Vocabulary source 'words.bin' unavailable: not found"
        );

        let err = AnagramError::EmptyVocabulary {
            source_name: "empty.txt".to_string(),
        };
        assert!(err.to_string().contains("no usable words"));
    }
}
