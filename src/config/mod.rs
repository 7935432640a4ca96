//! Configuration module for topictag
//!
//! Holds the indexer settings, display preferences and the group
//! definitions a session starts from. Configuration is stored as TOML in the
//! user's config directory (`~/.config/topictag/config.toml` on Linux).
//!
//! ```toml
//! [indexer]
//! program = "etags"
//! timeout_secs = 60
//!
//! [[groups]]
//! name = "notes"
//! base_directory = "/home/me/notes"
//! format = "org"
//! include = "*.org"
//! exclude = ["scratch.org"]
//! selected = true
//! ```
//!
//! A relative `base_directory` is taken relative to the directory holding
//! the config file; a leading `~` stands for the home directory.

mod setup;

pub use setup::write_default;

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::groups::resolve::anchor;
use crate::groups::{GroupSpec, Registry};
use crate::indexer::IndexerConfig;

/// Path display format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathFormat {
    /// Display absolute paths
    #[default]
    Absolute,
    /// Display relative paths (relative to current directory)
    Relative,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TopicTagConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default format for displaying paths (absolute or relative)
    #[serde(default)]
    pub path_format: PathFormat,

    /// External indexer settings
    #[serde(default)]
    pub indexer: IndexerConfig,

    /// Group definitions declared at startup
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

impl TopicTagConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("topictag").join("config.toml"))
    }

    /// Load configuration from `path`, or defaults if it does not exist
    ///
    /// Relative group base directories are anchored at the file's directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let mut config: Self = settings.try_deserialize()?;
        if let Some(dir) = path.parent() {
            for spec in &mut config.groups {
                spec.base_directory = anchor(&spec.base_directory, dir);
            }
        }
        tracing::debug!(path = %path.display(), groups = config.groups.len(), "loaded config");
        Ok(config)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Build a fresh registry from the declared groups
    ///
    /// Groups with invalid patterns are skipped with a warning; they stay in
    /// `groups` so they can still be edited or removed.
    #[must_use]
    pub fn registry(&self) -> Registry {
        Registry::from_specs(self.groups.iter().cloned())
    }
}
