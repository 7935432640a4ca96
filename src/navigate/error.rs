use thiserror::Error;

use crate::patterns::PatternError;

/// Errors raised by tag navigation
#[derive(Debug, Error)]
pub enum NavigateError {
    /// Strict search found no occurrence anywhere in the text
    #[error("No occurrence of tag '{tag}'")]
    NoMatch { tag: String },

    /// Requested behavior exists only as a placeholder
    #[error("Not implemented: {feature}")]
    NotImplemented { feature: String },

    /// The tag value cannot form a search pattern
    #[error("Invalid tag: {0}")]
    Pattern(#[from] PatternError),
}
