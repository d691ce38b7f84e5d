//! Anagram groups command
//!
//! Lists the vocabulary's anagram classes, largest first.

use crate::search::Finder;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// One anagram class, owned for reporting
pub struct GroupEntry {
    pub key: String,
    pub words: Vec<String>,
}

/// Result of scanning the vocabulary for anagram classes
pub struct GroupsReport {
    pub vocabulary_size: usize,
    pub total_groups: usize,
    pub groups: Vec<GroupEntry>,
    pub duration: Duration,
}

/// Find anagram classes of at least `min_size` words, keeping the first `limit`
#[must_use]
pub fn run_groups(finder: &Finder<'_>, min_size: usize, limit: Option<usize>) -> GroupsReport {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Grouping {} words by signature...",
        finder.index().len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let all_groups = finder.anagram_groups(min_size);
    let duration = start.elapsed();
    spinner.finish_and_clear();

    let total_groups = all_groups.len();
    let groups = all_groups
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|group| GroupEntry {
            key: group.key,
            words: group.words.into_iter().map(str::to_string).collect(),
        })
        .collect();

    GroupsReport {
        vocabulary_size: finder.index().len(),
        total_groups,
        groups,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordIndex;

    #[test]
    fn limits_reported_groups() {
        let index = WordIndex::build(["cat", "act", "tac", "dog", "god", "owl", "low", "one"]);
        let finder = Finder::new(&index);

        let report = run_groups(&finder, 2, Some(2));
        assert_eq!(report.vocabulary_size, 8);
        assert_eq!(report.total_groups, 3);
        assert_eq!(report.groups.len(), 2);
        assert_eq!(report.groups[0].key, "act");
        assert_eq!(report.groups[0].words, ["cat", "act", "tac"]);
    }

    #[test]
    fn builtin_list_has_large_groups() {
        let words = crate::wordlists::WordSource::Builtin.load().unwrap();
        let index = WordIndex::build(&words);
        let finder = Finder::new(&index);

        let report = run_groups(&finder, 5, None);
        assert!(report.groups.iter().any(|g| g.words.contains(&"stop".to_string())));
        assert!(report.groups.iter().all(|g| g.words.len() >= 5));
    }
}
