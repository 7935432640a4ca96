//! Indexer error types
//!
//! A program that cannot be started (`Launch`) is kept apart from a program
//! that ran and reported failure (`Failed`); both name the group.

use std::io;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

use crate::groups::GroupError;

/// Errors raised while running the external indexer
#[derive(Debug, Error)]
pub enum IndexerError {
    /// The executable is missing or could not be spawned
    #[error("Failed to launch indexer '{program}' for group '{group}': {source}")]
    Launch {
        group: String,
        program: String,
        #[source]
        source: io::Error,
    },

    /// The indexer ran and exited unsuccessfully
    #[error("Indexer failed for group '{group}' ({status})")]
    Failed { group: String, status: ExitStatus },

    /// Waiting on the running indexer failed
    #[error("Lost track of indexer for group '{group}': {source}")]
    Wait {
        group: String,
        #[source]
        source: io::Error,
    },

    /// The indexer ran past the configured timeout and was killed
    #[error("Indexer for group '{group}' timed out after {after:?}")]
    Timeout { group: String, after: Duration },

    /// The group could not be looked up
    #[error(transparent)]
    Group(#[from] GroupError),
}

impl IndexerError {
    /// Name of the group the failure belongs to, if known
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        match self {
            Self::Launch { group, .. }
            | Self::Failed { group, .. }
            | Self::Wait { group, .. }
            | Self::Timeout { group, .. } => Some(group.as_str()),
            Self::Group(GroupError::NotFound(name) | GroupError::Pattern { group: name, .. }) => {
                Some(name.as_str())
            }
        }
    }
}
