//! Vocabulary update command
//!
//! Rebuilds the cache from the configured word source.

use crate::cache;
use crate::core::WordIndex;
use crate::errors::AnagramError;
use crate::wordlists::WordSource;
use std::path::{Path, PathBuf};

/// Result of rebuilding the vocabulary cache
pub struct UpdateReport {
    pub source: String,
    pub cache_path: PathBuf,
    pub words: usize,
    /// (length, word count) per bucket, ascending by length
    pub buckets: Vec<(usize, usize)>,
}

impl UpdateReport {
    #[must_use]
    pub fn from_index(source: &WordSource, cache_path: &Path, index: &WordIndex) -> Self {
        Self {
            source: source.to_string(),
            cache_path: cache_path.to_path_buf(),
            words: index.len(),
            buckets: index
                .lengths()
                .map(|len| (len, index.lookup(len).len()))
                .collect(),
        }
    }
}

/// Rebuild the cache and return the fresh index with a summary
///
/// # Errors
///
/// Fails if the source cannot be read or the cache cannot be written.
pub fn run_update(
    source: &WordSource,
    cache_path: &Path,
) -> Result<(WordIndex, UpdateReport), AnagramError> {
    let index = cache::rebuild(source, cache_path)?;
    let report = UpdateReport::from_index(source, cache_path, &index);
    Ok((index, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn update_reports_buckets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.bin");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a\nto\nat\nice cream\ncat").unwrap();
        let source = WordSource::File(file.path().to_path_buf());

        let (index, report) = run_update(&source, &path).unwrap();
        assert_eq!(index.len(), 4);
        assert_eq!(report.words, 4);
        assert_eq!(report.buckets, [(1, 1), (2, 2), (3, 1)]);
        assert_eq!(report.cache_path, path);
        assert!(path.exists());
    }

    #[test]
    fn update_with_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordSource::File(dir.path().join("missing.txt"));
        assert!(run_update(&source, &dir.path().join("words.bin")).is_err());
    }
}
