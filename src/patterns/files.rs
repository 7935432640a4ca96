use glob::Pattern as GlobPattern;
use regex::Regex;

use super::error::{PatternError, PatternKind, non_empty};

/// Filename pattern of a group include or exclude rule
///
/// Regexes match anywhere in the filename, globs must match the whole name.
#[derive(Debug, Clone)]
pub enum FilePattern {
    Regex { original: String, compiled: Regex },
    Glob { original: String, spec: GlobPattern },
}

impl FilePattern {
    /// Compile a regular-expression filename pattern.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidEmpty` for an empty pattern and
    /// `PatternError::InvalidRegex` if it does not compile.
    pub fn regex(p: &str) -> Result<Self, PatternError> {
        let original = non_empty(p, PatternKind::File)?.to_string();
        match Regex::new(&original) {
            Ok(compiled) => Ok(Self::Regex { original, compiled }),
            Err(source) => Err(PatternError::InvalidRegex {
                pattern: original,
                source,
            }),
        }
    }

    /// Parse a shell-style glob filename pattern.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidEmpty` for an empty pattern and
    /// `PatternError::InvalidGlob` if it cannot be parsed.
    pub fn glob(p: &str) -> Result<Self, PatternError> {
        let original = non_empty(p, PatternKind::File)?.to_string();
        match GlobPattern::new(&original) {
            Ok(spec) => Ok(Self::Glob { original, spec }),
            Err(source) => Err(PatternError::InvalidGlob {
                pattern: original,
                source,
            }),
        }
    }

    /// Test a filename against the pattern
    #[must_use]
    pub fn matches(&self, filename: &str) -> bool {
        match self {
            Self::Regex { compiled, .. } => compiled.is_match(filename),
            Self::Glob { spec, .. } => spec.matches(filename),
        }
    }

    #[must_use]
    pub fn original(&self) -> &str {
        match self {
            Self::Regex { original, .. } | Self::Glob { original, .. } => original.as_str(),
        }
    }
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Regex { original: a, .. }, Self::Regex { original: b, .. })
            | (Self::Glob { original: a, .. }, Self::Glob { original: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for FilePattern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_matches_whole_name() {
        let pattern = FilePattern::glob("*.txt").unwrap();
        assert!(pattern.matches("notes.txt"));
        assert!(!pattern.matches("notes.txt.bak"));
    }

    #[test]
    fn test_regex_matches_anywhere() {
        let pattern = FilePattern::regex(r"\.el").unwrap();
        assert!(pattern.matches("init.el"));
        assert!(pattern.matches("init.elc"));
        assert!(!pattern.matches("README"));
    }

    #[test]
    fn test_empty_patterns_rejected() {
        assert!(matches!(
            FilePattern::glob(""),
            Err(PatternError::InvalidEmpty { kind: PatternKind::File })
        ));
        assert!(matches!(
            FilePattern::regex(""),
            Err(PatternError::InvalidEmpty { kind: PatternKind::File })
        ));
    }

    #[test]
    fn test_invalid_patterns_rejected() {
        assert!(matches!(FilePattern::regex("(unclosed"), Err(PatternError::InvalidRegex { .. })));
        assert!(matches!(FilePattern::glob("[unclosed"), Err(PatternError::InvalidGlob { .. })));
    }

    #[test]
    fn test_equality_by_original_and_kind() {
        assert_eq!(FilePattern::glob("*.md").unwrap(), FilePattern::glob("*.md").unwrap());
        assert_ne!(FilePattern::glob("md").unwrap(), FilePattern::regex("md").unwrap());
    }
}
