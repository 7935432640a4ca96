//! Scan command - refresh group file lists

use super::Session;
use crate::{TopicTagError, output};

type Result<T> = std::result::Result<T, TopicTagError>;

/// Execute the scan command
///
/// Named groups are rescanned in the given order; with no names every
/// selected group is rescanned.
///
/// # Errors
/// Returns `TopicTagError::GroupError` if a named group does not exist.
pub fn execute(session: &mut Session, names: &[String]) -> Result<()> {
    let scanned: Vec<String> = if names.is_empty() {
        session
            .registry
            .scan_selected()
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    } else {
        for name in names {
            session.registry.scan_group(name)?;
        }
        names.to_vec()
    };

    if scanned.is_empty() {
        if !session.quiet {
            println!("No groups selected. Name groups to scan or run 'topictag groups select'.");
        }
        return Ok(());
    }

    for name in &scanned {
        let group = session.registry.get(name)?;
        if !session.quiet {
            println!("{name}: {} file(s)", group.files.len());
        }
        for file in &group.files {
            if session.quiet {
                println!("{}", output::format_path(file, session.path_format));
            } else {
                println!("  {}", output::format_path(file, session.path_format));
            }
        }
    }
    Ok(())
}
