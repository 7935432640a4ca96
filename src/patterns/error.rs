use std::fmt;

use thiserror::Error;

/// What a rejected pattern was meant to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// A tag value inside a `<: ... :>` marker
    Tag,
    /// A filename in a group include or exclude rule
    File,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag => f.write_str("tag"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Errors produced while building tag or filename patterns
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Empty {kind} pattern provided")]
    InvalidEmpty { kind: PatternKind },

    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Reject an empty pattern of the given kind, passing anything else through.
///
/// # Errors
/// Returns `PatternError::InvalidEmpty` if `pattern` is empty.
pub fn non_empty(pattern: &str, kind: PatternKind) -> Result<&str, PatternError> {
    if pattern.is_empty() {
        Err(PatternError::InvalidEmpty { kind })
    } else {
        Ok(pattern)
    }
}
