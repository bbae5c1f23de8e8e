use super::LineMatcher;
use crate::dataset::Dataset;

/// Knuth-Morris-Pratt substring scan.
///
/// The query is treated as a pattern and searched for *anywhere inside* each
/// line, so this strategy answers true for queries contained in a longer
/// line, not only lines equal to the query. The failure table is built once
/// per invocation from the pattern and reused across all lines.
///
/// An empty pattern trivially matches any line, so an empty query reports
/// true whenever the dataset is non-empty.
pub struct KmpMatcher;

impl LineMatcher for KmpMatcher {
    fn exists(&self, dataset: &Dataset, query: &str) -> bool {
        let pattern = query.as_bytes();
        if pattern.is_empty() {
            return !dataset.is_empty();
        }

        let table = failure_table(pattern);
        dataset
            .lines()
            .iter()
            .any(|line| contains(line.as_bytes(), pattern, &table))
    }

    fn name(&self) -> &'static str {
        "kmp"
    }
}

/// `table[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut table = vec![0usize; pattern.len()];
    let mut j = 0;
    for i in 1..pattern.len() {
        while j > 0 && pattern[i] != pattern[j] {
            j = table[j - 1];
        }
        if pattern[i] == pattern[j] {
            j += 1;
        }
        table[i] = j;
    }
    table
}

fn contains(text: &[u8], pattern: &[u8], table: &[usize]) -> bool {
    let mut j = 0;
    for &byte in text {
        while j > 0 && byte != pattern[j] {
            j = table[j - 1];
        }
        if byte == pattern[j] {
            j += 1;
        }
        if j == pattern.len() {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(lines: &[&str]) -> Dataset {
        Dataset::from_lines(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_failure_table() {
        assert_eq!(failure_table(b"abcabd"), [0, 0, 0, 1, 2, 0]);
        assert_eq!(failure_table(b"aabaa"), [0, 1, 0, 1, 2]);
        assert_eq!(failure_table(b"aaaa"), [0, 1, 2, 3]);
    }

    #[test]
    fn test_exact_line_matches() {
        let d = dataset(&["10;0;1;26;0;9;3;0;"]);
        assert!(KmpMatcher.exists(&d, "10;0;1;26;0;9;3;0;"));
    }

    #[test]
    fn test_substring_containment_matches() {
        let d = dataset(&["abcdef"]);
        assert!(KmpMatcher.exists(&d, "cde"));
        assert!(KmpMatcher.exists(&d, "abcdef"));
        assert!(!KmpMatcher.exists(&d, "abcdefg"));
        assert!(!KmpMatcher.exists(&d, "xyz"));
    }

    #[test]
    fn test_self_overlapping_pattern() {
        let d = dataset(&["xxabababcyy"]);
        assert!(KmpMatcher.exists(&d, "ababc"));
        assert!(!KmpMatcher.exists(&d, "ababd"));
    }

    #[test]
    fn test_empty_query_convention() {
        assert!(KmpMatcher.exists(&dataset(&["a"]), ""));
        assert!(!KmpMatcher.exists(&dataset(&[]), ""));
    }

    #[test]
    fn test_pattern_longer_than_every_line() {
        let d = dataset(&["ab", "cd"]);
        assert!(!KmpMatcher.exists(&d, "abcd"));
    }
}
