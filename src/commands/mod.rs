//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against a [`Session`].

pub mod config;
pub mod groups;
pub mod index;
pub mod navigate;
pub mod scan;
pub mod tags;

// Re-export execute functions for convenience
pub use self::config::execute as config;
pub use groups::execute as groups;
pub use index::execute as index;
pub use scan::execute as scan;
pub use tags::execute as tags;

use std::fs;
use std::path::{Path, PathBuf};

use crate::TopicTagError;
use crate::config::{PathFormat, TopicTagConfig};
use crate::groups::Registry;
use crate::tags::TagIndex;

type Result<T> = std::result::Result<T, TopicTagError>;

/// State shared by the commands of one run
#[derive(Debug)]
pub struct Session {
    pub config: TopicTagConfig,
    pub config_path: PathBuf,
    pub registry: Registry,
    pub tag_index: TagIndex,
    pub path_format: PathFormat,
    pub quiet: bool,
}

impl Session {
    /// Build a session whose registry is declared from `config`.
    ///
    /// Invalid group definitions are skipped; they stay in `config`.
    #[must_use]
    pub fn new(
        config: TopicTagConfig,
        config_path: PathBuf,
        path_format: PathFormat,
        quiet: bool,
    ) -> Self {
        let registry = config.registry();
        tracing::debug!(groups = registry.len(), "session registry ready");
        Self {
            config,
            config_path,
            registry,
            tag_index: TagIndex::new(),
            path_format,
            quiet,
        }
    }

    /// Persist the configuration back to the file it was loaded from.
    ///
    /// # Errors
    /// Returns `TopicTagError::ConfigError` if the file cannot be written.
    pub fn save_config(&self) -> Result<()> {
        self.config.save_to(&self.config_path)?;
        Ok(())
    }
}

/// Read a text file, naming the path on failure
///
/// # Errors
/// Returns `TopicTagError::InvalidInput` if the file cannot be read as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| TopicTagError::InvalidInput(format!("Cannot read '{}': {e}", path.display())))
}
