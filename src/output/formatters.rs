//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `"1 word"`, `"3 words"`
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Describe a word limit, where the query length means "no limit"
#[must_use]
pub fn describe_word_limit(limit: usize, query_len: usize) -> String {
    if limit >= query_len {
        "no limit".to_string()
    } else {
        format!("up to {}", pluralize(limit, "word"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize(0, "word"), "0 words");
        assert_eq!(pluralize(1, "word"), "1 word");
        assert_eq!(pluralize(12, "anagram"), "12 anagrams");
    }

    #[test]
    fn word_limit_description() {
        assert_eq!(describe_word_limit(9, 9), "no limit");
        assert_eq!(describe_word_limit(2, 9), "up to 2 words");
        assert_eq!(describe_word_limit(1, 9), "up to 1 word");
        assert_eq!(describe_word_limit(0, 0), "no limit");
    }
}
