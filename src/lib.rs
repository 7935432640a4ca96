//! Topictag - inline topic tags for plaintext and source files
//!
//! Files are annotated with markers such as `<: parser-state :>` inside
//! comments. This library extracts and navigates those markers, groups files
//! into named, declaratively defined sets, and drives an etags-compatible
//! indexer so topic tags become searchable next to ordinary symbols.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod groups;
pub mod indexer;
pub mod logging;
pub mod navigate;
pub mod output;
pub mod patterns;
pub mod tags;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TopicTagError {
    /// Group lookup or definition error
    #[error("Group error: {0}")]
    GroupError(#[from] groups::GroupError),
    /// External indexer error
    #[error("Indexer error: {0}")]
    IndexerError(#[from] indexer::IndexerError),
    /// Tag navigation error
    #[error("Navigation error: {0}")]
    NavigateError(#[from] navigate::NavigateError),
    /// Pattern construction error
    #[error("Pattern error: {0}")]
    PatternError(#[from] patterns::PatternError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// JSON output error
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
