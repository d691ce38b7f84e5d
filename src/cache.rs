//! Vocabulary cache
//!
//! Persists the length-bucketed vocabulary in binary form so later sessions
//! skip rebuilding it from the word source.

use crate::core::{Buckets, WordIndex};
use crate::errors::AnagramError;
use crate::wordlists::WordSource;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;

/// Default cache file, relative to the working directory
pub const DEFAULT_CACHE_PATH: &str = "words.bin";

#[derive(serde::Serialize, serde::Deserialize)]
struct CachedIndex {
    buckets: Buckets,
}

/// Write the index to `path`, replacing any previous cache atomically
///
/// # Errors
///
/// Returns `SourceUnavailable` if the cache directory or file cannot be written.
pub fn save_index(index: &WordIndex, path: &Path) -> Result<(), AnagramError> {
    let unavailable =
        |e: &dyn std::fmt::Display| AnagramError::source_unavailable(path.display(), e);

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| unavailable(&e))?;

    let state = CachedIndex {
        buckets: index.to_buckets(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| unavailable(&e))?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, &state).map_err(|e| unavailable(&e))?;
    temp_file.persist(path).map_err(|e| unavailable(&e))?;

    log::debug!("Saved {} words to {}", index.len(), path.display());
    Ok(())
}

/// Read an index previously written by [`save_index`]
///
/// # Errors
///
/// Returns `SourceUnavailable` if the file is missing or not a valid cache,
/// and `EmptyVocabulary` if it holds no words.
pub fn load_index(path: &Path) -> Result<WordIndex, AnagramError> {
    let unavailable =
        |e: &dyn std::fmt::Display| AnagramError::source_unavailable(path.display(), e);

    let file = File::open(path).map_err(|e| unavailable(&e))?;
    let state: CachedIndex =
        bincode::deserialize_from(BufReader::new(file)).map_err(|e| unavailable(&e))?;

    let index = WordIndex::from_buckets(state.buckets);
    if index.is_empty() {
        return Err(AnagramError::EmptyVocabulary {
            source_name: path.display().to_string(),
        });
    }
    log::debug!("Loaded {} words from {}", index.len(), path.display());
    Ok(index)
}

/// Build an index from `source` and save it to `path`
///
/// # Errors
///
/// Fails if the source cannot be read, holds no words, or the cache cannot
/// be written.
pub fn rebuild(source: &WordSource, path: &Path) -> Result<WordIndex, AnagramError> {
    log::info!("Rebuilding vocabulary cache from {source}");
    let words = source.load()?;
    let index = WordIndex::build(&words);
    if index.is_empty() {
        return Err(AnagramError::EmptyVocabulary {
            source_name: source.to_string(),
        });
    }
    save_index(&index, path)?;
    log::info!(
        "Cached {} words ({} skipped) in {}",
        index.len(),
        words.len() - index.len(),
        path.display()
    );
    Ok(index)
}

/// Open the session vocabulary
///
/// Loads the cache at `path` unless `force_rebuild` is set; a missing or
/// unreadable cache falls back to rebuilding from `source`.
///
/// # Errors
///
/// Fails when neither the cache nor the source yields a usable vocabulary.
pub fn open(
    source: &WordSource,
    path: &Path,
    force_rebuild: bool,
) -> Result<WordIndex, AnagramError> {
    if force_rebuild {
        return rebuild(source, path);
    }

    match load_index(path) {
        Ok(index) => Ok(index),
        Err(e) => {
            log::warn!("{e}; rebuilding");
            rebuild(source, path)
        }
    }
}
