//! Phrase search command
//!
//! Decomposes a query into combinations of vocabulary words.

use crate::core::normalize;
use crate::search::{Combination, Finder, SearchOptions};
use std::time::{Duration, Instant};

/// Configuration for a phrase search
pub struct SearchConfig {
    pub query: String,
    pub options: SearchOptions,
}

impl SearchConfig {
    #[must_use]
    pub fn new(query: String) -> Self {
        Self {
            query,
            options: SearchOptions::default(),
        }
    }
}

/// Summary of a finished phrase search
pub struct SearchReport {
    pub query: String,
    pub normalized: String,
    pub candidates: usize,
    pub word_limit: usize,
    pub found: usize,
    pub duration: Duration,
}

/// Run a phrase search, passing each accepted combination to `on_result`
/// as soon as it is found
///
/// Results are streamed rather than collected; the report only counts them.
pub fn run_search<F>(finder: &Finder<'_>, config: &SearchConfig, mut on_result: F) -> SearchReport
where
    F: FnMut(&Combination<'_>),
{
    let start = Instant::now();
    let normalized = normalize(&config.query);

    let candidates = finder.candidates(&config.query);
    let word_limit = config.options.word_limit(normalized.chars().count());

    let mut found = 0;
    for combination in finder.search(&config.query, &candidates, config.options) {
        on_result(&combination);
        found += 1;
    }

    SearchReport {
        query: config.query.clone(),
        normalized,
        candidates: candidates.len(),
        word_limit,
        found,
        duration: start.elapsed(),
    }
}
