//! Tag navigation
//!
//! Pure searches over a text body: callers pass explicit byte offsets and
//! get explicit spans back. A forward search leaves the cursor at the end of
//! the match, a backward search at its start.
//!
//! Wraparound is a two-phase search. The first phase honors the cursor and
//! the optional bound; if it fails and wrapping is allowed, the second phase
//! scans the whole text from the far end.

pub mod error;

pub use error::NavigateError;

use std::path::PathBuf;

use regex::Regex;

use crate::groups::Group;
use crate::patterns::tags::{OPEN_DELIM, literal_marker_regex, marker_regex};

/// Byte range of a marker within a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Where the cursor lands after a search in `direction`
    #[must_use]
    pub const fn landing(&self, direction: Direction) -> usize {
        match direction {
            Direction::Forward => self.end,
            Direction::Backward => self.start,
        }
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        Self::new(m.start(), m.end())
    }
}

/// Search direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Options shared by forward and backward searches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Return `Ok(None)` instead of `NavigateError::NoMatch`
    pub no_error: bool,
    /// Do not restart from the other end of the text
    pub no_wrap: bool,
    /// Limit of the first phase: forward matches must end at or before it,
    /// backward matches must start at or after it
    pub bound: Option<usize>,
}

impl SearchOptions {
    /// Lenient wrapping search
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            no_error: true,
            no_wrap: false,
            bound: None,
        }
    }
}

/// Regex matching exactly the marker of `tag`, with `tag` taken literally.
///
/// # Errors
/// Returns `NavigateError::Pattern` if `tag` is empty.
pub fn format_tag_pattern(tag: &str) -> Result<Regex, NavigateError> {
    Ok(literal_marker_regex(tag)?)
}

/// Find the next occurrence of `tag` at or after `cursor`.
///
/// # Errors
/// * Returns `NavigateError::NoMatch` if nothing is found and `no_error` is unset.
/// * Returns `NavigateError::Pattern` if `tag` is empty.
pub fn next_occurrence(
    text: &str,
    cursor: usize,
    tag: &str,
    options: SearchOptions,
) -> Result<Option<Span>, NavigateError> {
    find_occurrence(text, cursor, tag, Direction::Forward, options)
}

/// Find the closest occurrence of `tag` ending at or before `cursor`.
///
/// # Errors
/// * Returns `NavigateError::NoMatch` if nothing is found and `no_error` is unset.
/// * Returns `NavigateError::Pattern` if `tag` is empty.
pub fn previous_occurrence(
    text: &str,
    cursor: usize,
    tag: &str,
    options: SearchOptions,
) -> Result<Option<Span>, NavigateError> {
    find_occurrence(text, cursor, tag, Direction::Backward, options)
}

/// Direction-generic form of [`next_occurrence`] and [`previous_occurrence`].
///
/// # Errors
/// * Returns `NavigateError::NoMatch` if nothing is found and `no_error` is unset.
/// * Returns `NavigateError::Pattern` if `tag` is empty.
pub fn find_occurrence(
    text: &str,
    cursor: usize,
    tag: &str,
    direction: Direction,
    options: SearchOptions,
) -> Result<Option<Span>, NavigateError> {
    let re = format_tag_pattern(tag)?;
    let cursor = clamp(text, cursor);

    let bounded = match direction {
        Direction::Forward => {
            let limit = options.bound.map_or(text.len(), |b| clamp(text, b));
            if cursor <= limit {
                re.find_at(&text[..limit], cursor).map(Span::from)
            } else {
                None
            }
        }
        Direction::Backward => {
            let lower = options.bound.map_or(0, |b| clamp(text, b));
            rfind_marker(&re, &text[..cursor], lower)
        }
    };

    let found = match bounded {
        Some(span) => Some(span),
        None if options.no_wrap => None,
        None => {
            tracing::debug!(tag, ?direction, "wrapping tag search");
            match direction {
                Direction::Forward => re.find(text).map(Span::from),
                Direction::Backward => rfind_marker(&re, text, 0),
            }
        }
    };

    match found {
        Some(span) => Ok(Some(span)),
        None if options.no_error => Ok(None),
        None => Err(NavigateError::NoMatch {
            tag: tag.to_string(),
        }),
    }
}

/// Value of the first marker starting within `[line_start, line_end]`.
#[must_use]
pub fn tag_on_current_line(text: &str, line_start: usize, line_end: usize) -> Option<String> {
    let line_start = clamp(text, line_start);
    let caps = marker_regex().captures_at(text, line_start)?;
    let whole = caps.get(0)?;
    if whole.start() > line_end {
        return None;
    }
    caps.get(1).map(|m| m.as_str().to_string())
}

/// Tag to act on at `cursor`: the one on the current line, otherwise the
/// nearest marker before the cursor.
#[must_use]
pub fn auto_choose_tag(text: &str, cursor: usize, line: (usize, usize)) -> Option<String> {
    if let Some(tag) = tag_on_current_line(text, line.0, line.1) {
        return Some(tag);
    }
    let cursor = clamp(text, cursor);
    let span = rfind_marker(marker_regex(), &text[..cursor], 0)?;
    marker_regex()
        .captures(&text[span.start..span.end])
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Byte bounds `(start, end)` of the line containing `cursor`, newline excluded.
#[must_use]
pub fn line_bounds(text: &str, cursor: usize) -> (usize, usize) {
    let cursor = clamp(text, cursor);
    let start = text[..cursor].rfind('\n').map_or(0, |i| i + 1);
    let end = text[cursor..].find('\n').map_or(text.len(), |i| cursor + i);
    (start, end)
}

/// 1-based line and column (in characters) of a byte offset.
#[must_use]
pub fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let offset = clamp(text, offset);
    let (start, _) = line_bounds(text, offset);
    let line = text[..offset].matches('\n').count() + 1;
    let column = text[start..offset].chars().count() + 1;
    (line, column)
}

/// Jump to the next occurrence of `tag` across all files of `group`.
///
/// # Errors
/// Always returns `NavigateError::NotImplemented`: the file order and the
/// per-file cursor handling for group-wide seeking are undecided.
pub fn seek_tag_in_group(group: &Group, tag: &str) -> Result<(PathBuf, Span), NavigateError> {
    tracing::debug!(group = %group.name, tag, "group-wide tag seek requested");
    Err(NavigateError::NotImplemented {
        feature: format!("seeking tag '{tag}' across group '{}'", group.name),
    })
}

/// Last match of `re` lying entirely inside `hay` and starting at or after `lower`.
///
/// Every marker starts with the opening delimiter, so only those positions
/// are tried, nearest first.
fn rfind_marker(re: &Regex, hay: &str, lower: usize) -> Option<Span> {
    hay.rmatch_indices(OPEN_DELIM)
        .map(|(start, _)| start)
        .take_while(|&start| start >= lower)
        .find_map(|start| re.find_at(hay, start).filter(|m| m.start() == start))
        .map(Span::from)
}

/// Clamp `pos` into `text` and back onto a character boundary.
fn clamp(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
