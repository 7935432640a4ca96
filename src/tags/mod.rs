//! Tag extraction
//!
//! Finds `<: value :>` markers in text. Values are compared byte for byte,
//! so `Todo` and `todo` are different tags.

mod cache;

pub use cache::{SourceId, TagIndex};

use crate::patterns::tags::marker_regex;

/// Every tag value in `text`, in document order, duplicates included.
#[must_use]
pub fn find_all_tags(text: &str) -> Vec<String> {
    marker_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Distinct tag values in `text`, sorted ascending.
#[must_use]
pub fn distinct_tags(text: &str) -> Vec<String> {
    let mut tags = find_all_tags(text);
    tags.sort();
    tags.dedup();
    tags
}
