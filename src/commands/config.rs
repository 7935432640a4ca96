//! Config command - create or locate the configuration file

use std::path::Path;

use crate::{TopicTagError, cli::ConfigCommands, config::{self, TopicTagConfig}};

type Result<T> = std::result::Result<T, TopicTagError>;

/// Execute the config command
///
/// `path` is the `--config` override, if any.
///
/// # Errors
/// Returns `TopicTagError::ConfigError` if the default location cannot be
/// determined or `init` finds an existing file.
pub fn execute(command: &ConfigCommands, path: Option<&Path>, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Init => {
            let written = config::write_default(path)?;
            if quiet {
                println!("{}", written.display());
            } else {
                println!("Wrote default configuration to {}", written.display());
            }
        }
        ConfigCommands::Path => {
            let target = match path {
                Some(p) => p.to_path_buf(),
                None => TopicTagConfig::config_path()?,
            };
            println!("{}", target.display());
        }
    }
    Ok(())
}
