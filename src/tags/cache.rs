use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::distinct_tags;

/// Identity of a text source whose tag set is cached
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceId {
    /// Text read from a file
    Path(PathBuf),
    /// Text held by the host under an opaque id (e.g. an unsaved buffer)
    Buffer(String),
}

impl From<&Path> for SourceId {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for SourceId {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::Buffer(id.to_string())
    }
}

/// Per-source cache of sorted, distinct tag sets
///
/// Entries never go stale on their own: editing the text does not touch the
/// cache until the caller rescans or invalidates the source.
#[derive(Debug, Default)]
pub struct TagIndex {
    sets: HashMap<SourceId, Vec<String>>,
}

impl TagIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the tag set of `source` from `text`, replacing any cached one.
    pub fn rescan(&mut self, source: impl Into<SourceId>, text: &str) -> &[String] {
        let source = source.into();
        let tags = distinct_tags(text);
        tracing::debug!(?source, tags = tags.len(), "rescanned tags");
        let slot = self.sets.entry(source).or_default();
        *slot = tags;
        slot
    }

    /// Cached tag set of `source`, computed from `text` on first use.
    pub fn current(&mut self, source: impl Into<SourceId>, text: &str) -> &[String] {
        self.sets
            .entry(source.into())
            .or_insert_with(|| distinct_tags(text))
    }

    /// Cached tag set of `source`, if any
    #[must_use]
    pub fn get(&self, source: &SourceId) -> Option<&[String]> {
        self.sets.get(source).map(Vec::as_slice)
    }

    /// Drop the cached set of `source`; returns whether one existed.
    pub fn invalidate(&mut self, source: &SourceId) -> bool {
        self.sets.remove(source).is_some()
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
