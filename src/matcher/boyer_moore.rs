use super::LineMatcher;
use crate::dataset::Dataset;

/// Boyer-Moore-Horspool substring scan.
///
/// Same substring-containment contract as [`super::KmpMatcher`]: the query
/// matches when any line contains it anywhere, and the two substring
/// strategies always agree. A bad-character skip table is built once per
/// invocation; each window is compared right-to-left and shifted by the skip
/// of the byte under the window's last position, which guarantees forward
/// progress.
pub struct BoyerMooreMatcher;

impl LineMatcher for BoyerMooreMatcher {
    fn exists(&self, dataset: &Dataset, query: &str) -> bool {
        let pattern = query.as_bytes();
        if pattern.is_empty() {
            return !dataset.is_empty();
        }

        let skip = skip_table(pattern);
        dataset
            .lines()
            .iter()
            .any(|line| contains(line.as_bytes(), pattern, &skip))
    }

    fn name(&self) -> &'static str {
        "boyer-moore"
    }
}

/// Bytes absent from the pattern shift a full pattern length; bytes present
/// shift to align their last occurrence (excluding the final position) with
/// the window end.
fn skip_table(pattern: &[u8]) -> [usize; 256] {
    let m = pattern.len();
    let mut skip = [m; 256];
    for (i, &byte) in pattern[..m - 1].iter().enumerate() {
        skip[byte as usize] = m - 1 - i;
    }
    skip
}

fn contains(text: &[u8], pattern: &[u8], skip: &[usize; 256]) -> bool {
    let m = pattern.len();
    let n = text.len();
    let mut pos = 0;
    while pos + m <= n {
        let mut j = m;
        while j > 0 && text[pos + j - 1] == pattern[j - 1] {
            j -= 1;
        }
        if j == 0 {
            return true;
        }
        pos += skip[text[pos + m - 1] as usize];
    }
    false
}
