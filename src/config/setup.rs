//! Initial configuration file
//!
//! Writes a starter config so users have something to edit. Nothing is
//! prompted for; groups are added by editing the TOML.

use std::path::{Path, PathBuf};

use config::ConfigError;

use super::TopicTagConfig;

/// Write the default configuration to `path`, or to the standard location
/// when `path` is `None`, and return where it was written.
///
/// # Errors
///
/// Returns `ConfigError` if a file already exists at the target, the config
/// directory cannot be determined, or the file cannot be written.
pub fn write_default(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => TopicTagConfig::config_path()?,
    };

    if target.exists() {
        return Err(ConfigError::Message(format!(
            "Config file already exists: {}",
            target.display()
        )));
    }

    TopicTagConfig::default().save_to(&target)?;
    tracing::info!(path = %target.display(), "wrote default config");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDir;

    #[test]
    fn test_write_default_creates_loadable_file() {
        let dir = TestDir::new();
        let target = dir.join("cfg/config.toml");
        let written = write_default(Some(&target)).unwrap();
        assert_eq!(written, target);
        assert_eq!(TopicTagConfig::load_from(&target).unwrap(), TopicTagConfig::default());
    }

    #[test]
    fn test_write_default_refuses_overwrite() {
        let dir = TestDir::new();
        let existing = dir.write("config.toml", "quiet = true\n");
        assert!(write_default(Some(&existing)).is_err());
        assert!(TopicTagConfig::load_from(&existing).unwrap().quiet);
    }
}
