//! Tag-marker grammar
//!
//! A marker is `<:`, one or more blanks, the tag value (no whitespace),
//! one or more blanks, `:>`. For example `<: parser-state :>`.
//!
//! The in-process regex and the rule handed to the external indexer are both
//! built from the same pieces so the two can never drift apart.

use std::sync::LazyLock;

use regex::Regex;

use super::error::{PatternError, PatternKind, non_empty};

/// Opening delimiter of a tag marker
pub const OPEN_DELIM: &str = "<:";
/// Closing delimiter of a tag marker
pub const CLOSE_DELIM: &str = ":>";

/// Blank characters allowed around the tag value
const BLANK_CLASS: &str = r"[ \t]";
/// Characters allowed inside the tag value
const VALUE_CLASS: &str = r"[^ \t\r\n]";

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&marker_source(&format!("({VALUE_CLASS}+)")))
        .unwrap_or_else(|e| unreachable!("tag marker grammar is a constant: {e}"))
});

fn marker_source(value: &str) -> String {
    format!(
        "{}{BLANK_CLASS}+{value}{BLANK_CLASS}+{}",
        regex::escape(OPEN_DELIM),
        regex::escape(CLOSE_DELIM)
    )
}

/// Regex matching any tag marker; capture group 1 holds the tag value.
#[must_use]
pub fn marker_regex() -> &'static Regex {
    &MARKER
}

/// Regex matching the marker of one specific tag value.
///
/// The value is escaped, so regex metacharacters in it are matched literally.
///
/// # Errors
/// Returns `PatternError::InvalidEmpty` if `value` is empty.
pub fn literal_marker_regex(value: &str) -> Result<Regex, PatternError> {
    let pattern = marker_source(&regex::escape(non_empty(value, PatternKind::Tag)?));
    Regex::new(&pattern).map_err(|source| PatternError::InvalidRegex { pattern, source })
}

/// Render a tag value as marker text, e.g. `<: todo :>`.
#[must_use]
pub fn format_marker(value: &str) -> String {
    format!("{OPEN_DELIM} {value} {CLOSE_DELIM}")
}

/// The `--regex` rule for etags-compatible indexers.
///
/// Uses Emacs regex syntax (`\(`..`\)` groups) and names each entry after
/// the captured tag value.
#[must_use]
pub fn indexer_rule() -> String {
    let body = format!(
        "{OPEN_DELIM}{BLANK_CLASS}+\\({VALUE_CLASS}+\\){BLANK_CLASS}+{CLOSE_DELIM}"
    );
    format!("/{body}/\\1/")
}
