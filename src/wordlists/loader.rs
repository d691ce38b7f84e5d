//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Lines are trimmed; blank lines and `#` comments are skipped. Multi-word
/// entries are kept as-is and left for the index to filter.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use anagram_finder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use anagram_finder::wordlists::loader::words_from_slice;
/// use anagram_finder::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_keeps_order() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);
        assert_eq!(words, ["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let input = &["crane", "", "  ", " slate "];
        let words = words_from_slice(input);
        assert_eq!(words, ["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn lines_skip_comments_and_blanks() {
        let words = words_from_lines("# header\nlisten\n\n  silent  \nice cream\n");
        assert_eq!(words, ["listen", "silent", "ice cream"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stop\npots\n\ntops").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, ["stop", "pots", "tops"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }
}
