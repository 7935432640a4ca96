//! Pattern system module - group membership filters and the tag-marker grammar.
//!
//! A [`Filter`] decides whether a filename belongs to (or is excluded from)
//! a group. It is either a compiled [`FilePattern`] or an explicit list of
//! filenames; an absent filter matches nothing.

pub mod error;
pub mod files;
pub mod tags;

pub use error::{PatternError, PatternKind};
pub use files::FilePattern;

/// Group membership filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Filenames matching the pattern
    Pattern(FilePattern),
    /// Exact members of the list
    List(Vec<String>),
}

impl Filter {
    /// Test whether `filename` is selected by this filter.
    #[must_use]
    pub fn matches(&self, filename: &str) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.matches(filename),
            Self::List(names) => names.iter().any(|n| n == filename),
        }
    }
}

/// Test a filename against an optional filter.
///
/// An absent filter matches nothing, so an absent exclude removes nothing.
#[must_use]
pub fn matches_filter(filename: &str, filter: Option<&Filter>) -> bool {
    filter.is_some_and(|f| f.matches(filename))
}

/// Remove every filename selected by `filter`, preserving the order of the rest.
#[must_use]
pub fn filter_out(files: Vec<String>, filter: Option<&Filter>) -> Vec<String> {
    let Some(filter) = filter else {
        return files;
    };
    let before = files.len();
    let kept: Vec<String> = files.into_iter().filter(|f| !filter.matches(f)).collect();
    tracing::debug!(removed = before - kept.len(), kept = kept.len(), "applied exclude filter");
    kept
}
