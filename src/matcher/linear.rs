use super::LineMatcher;
use crate::dataset::Dataset;

/// Top-to-bottom equality scan. O(n) per query, no preprocessing, no dataset
/// reshaping. Correctness baseline the other strategies are validated
/// against.
pub struct LinearMatcher;

impl LineMatcher for LinearMatcher {
    fn exists(&self, dataset: &Dataset, query: &str) -> bool {
        dataset.lines().iter().any(|line| line == query)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
