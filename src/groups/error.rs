//! Group-specific error types

use thiserror::Error;

use crate::patterns::PatternError;

/// Errors raised by group definition and registry operations
#[derive(Debug, Error)]
pub enum GroupError {
    /// Operation referenced a group name the registry does not hold
    #[error("Group '{0}' not found")]
    NotFound(String),

    /// An include or exclude pattern of the group failed to compile
    #[error("Invalid pattern in group '{group}': {source}")]
    Pattern {
        group: String,
        #[source]
        source: PatternError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_found_names_group() {
        let err = GroupError::NotFound("notes".to_string());
        assert_eq!(err.to_string(), "Group 'notes' not found");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_pattern_error_keeps_source() {
        let err = GroupError::Pattern {
            group: "lisp".to_string(),
            source: PatternError::InvalidEmpty {
                kind: crate::patterns::PatternKind::File,
            },
        };
        assert!(err.to_string().starts_with("Invalid pattern in group 'lisp'"));
        assert!(err.source().is_some());
    }
}
