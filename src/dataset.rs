use crate::error::ServeError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The reference dataset: an ordered sequence of newline-stripped lines.
/// Order and duplicates are preserved exactly as they appear on disk.
/// Read-only once loaded; the backing file is only ever rewritten
/// out-of-band between loads.
#[derive(Debug, Clone)]
pub struct Dataset {
    lines: Vec<String>,
    // Established once at construction; the lines never mutate afterwards
    // except through sort(), which keeps it in step.
    sorted: bool,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServeError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| ServeError::DatasetUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_lines(
            contents.lines().map(str::to_string).collect(),
        ))
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        let sorted = lines.windows(2).all(|w| w[0] <= w[1]);
        Self { lines, sorted }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// O(1): the flag is computed once at construction, so the bisection hot
    /// path on a pre-sorted snapshot never rescans the lines.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// In-place ascending sort. Used to pre-sort the static snapshot once
    /// when the binary strategy is selected for live serving, so the
    /// per-query re-sort is skipped on the hot path.
    pub fn sort(&mut self) {
        self.lines.sort_unstable();
        self.sorted = true;
    }
}

/// Reload policy, fixed once at startup.
///
/// `Static` loads the file before the listener starts accepting and every
/// query consults the same immutable snapshot. `RereadOnQuery` reloads the
/// full file immediately before every match, so queries always observe the
/// freshest on-disk content.
#[derive(Debug)]
pub enum DatasetStore {
    Static(Arc<Dataset>),
    RereadOnQuery(PathBuf),
}

impl DatasetStore {
    /// Builds the store for the configured policy. In static mode the load
    /// happens here, so a missing file fails startup rather than the first
    /// query. `presort` applies the one-time ascending sort to the snapshot.
    pub fn new(path: &Path, reread_on_query: bool, presort: bool) -> Result<Self, ServeError> {
        if reread_on_query {
            Ok(Self::RereadOnQuery(path.to_path_buf()))
        } else {
            let mut dataset = Dataset::load(path)?;
            if presort {
                dataset.sort();
            }
            Ok(Self::Static(Arc::new(dataset)))
        }
    }

    /// Returns the single dataset view for one query: the shared snapshot in
    /// static mode, a fresh independent load in reread mode. Never a
    /// half-loaded or stale mixture.
    pub fn snapshot(&self) -> Result<Arc<Dataset>, ServeError> {
        match self {
            Self::Static(dataset) => Ok(dataset.clone()),
            Self::RereadOnQuery(path) => Ok(Arc::new(Dataset::load(path)?)),
        }
    }
}
