pub mod binary;
pub mod boyer_moore;
pub mod hash;
pub mod kmp;
pub mod linear;

use crate::dataset::Dataset;
use std::sync::Arc;
use tracing::info;

pub use self::binary::BinaryMatcher;
pub use self::boyer_moore::BoyerMooreMatcher;
pub use self::hash::HashSetMatcher;
pub use self::kmp::KmpMatcher;
pub use self::linear::LinearMatcher;

/// The hot-path engine deciding dataset membership.
///
/// All strategies answer the same question for the equality family
/// (`linear`, `binary`, `hash`): is the query equal to some line of the
/// dataset? The substring family (`kmp`, `boyer-moore`) instead reports
/// whether any line *contains* the query, so it can answer true for queries
/// that are a strict substring of a longer line. That divergence is
/// long-standing observable behavior and is kept as-is; callers selecting a
/// substring strategy accept the wider contract.
pub trait LineMatcher: Send + Sync {
    fn exists(&self, dataset: &Dataset, query: &str) -> bool;

    /// Name used in logs and in the benchmark CSV.
    fn name(&self) -> &'static str;
}

/// Builds the matcher selected by configuration. Unknown strategy names fall
/// back to the linear baseline.
pub fn create_matcher(strategy: &str) -> Arc<dyn LineMatcher> {
    match strategy {
        "linear" => Arc::new(LinearMatcher),
        "binary" => Arc::new(BinaryMatcher),
        "hash" => Arc::new(HashSetMatcher),
        "kmp" => Arc::new(KmpMatcher),
        "boyer-moore" => Arc::new(BoyerMooreMatcher),
        _ => {
            info!("Unknown matcher strategy '{}', defaulting to linear", strategy);
            Arc::new(LinearMatcher)
        }
    }
}

/// Every strategy, for the benchmark harness.
pub fn all_matchers() -> Vec<Arc<dyn LineMatcher>> {
    vec![
        Arc::new(LinearMatcher),
        Arc::new(BinaryMatcher),
        Arc::new(HashSetMatcher),
        Arc::new(KmpMatcher),
        Arc::new(BoyerMooreMatcher),
    ]
}
