//! Query normalization and substring enumeration

/// Normalize a query into a single contiguous lowercase token
///
/// Lowercases, trims, and removes the whitespace between words so that a
/// phrase like `"Night Owl"` becomes `"nightowl"`.
///
/// # Examples
/// ```
/// use anagram_finder::core::normalize;
///
/// assert_eq!(normalize("  Eat Tea "), "eattea");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(query: &str) -> String {
    query
        .split_whitespace()
        .flat_map(str::chars)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Every contiguous, non-empty substring of `text`
///
/// Ordered by start index ascending, then end index ascending. A string of
/// `n` characters yields `n * (n + 1) / 2` substrings.
///
/// # Examples
/// ```
/// use anagram_finder::core::substrings;
///
/// assert_eq!(substrings("abc"), ["a", "ab", "abc", "b", "bc", "c"]);
/// ```
#[must_use]
pub fn substrings(text: &str) -> Vec<&str> {
    // Byte offsets of every char boundary, including the end of the string
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let n = bounds.len() - 1;

    let mut result = Vec::with_capacity(n * (n + 1) / 2);
    for start in 0..n {
        for end in start + 1..=n {
            result.push(&text[bounds[start]..bounds[end]]);
        }
    }
    result
}
