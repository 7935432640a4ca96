//! Tags command - list the tags of a file

use std::path::Path;

use super::{Session, read_text};
use crate::{TopicTagError, output, tags::find_all_tags};

type Result<T> = std::result::Result<T, TopicTagError>;

/// Execute the tags command
///
/// Without `all`, prints the sorted distinct tag set (rescanning the file's
/// cache entry). With `all`, prints every occurrence in document order.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn execute(session: &mut Session, file: &Path, all: bool) -> Result<()> {
    let text = read_text(file)?;

    if all {
        for tag in find_all_tags(&text) {
            println!("{tag}");
        }
        return Ok(());
    }

    let occurrences = find_all_tags(&text);
    let quiet = session.quiet;
    let tags = session.tag_index.rescan(file, &text);

    if tags.is_empty() {
        if !quiet {
            println!("No tags found in {}.", output::format_path(file, session.path_format));
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in {}:", output::format_path(file, session.path_format));
    }
    for tag in tags {
        let count = occurrences.iter().filter(|t| *t == tag).count();
        println!("{}", output::tag_with_count(tag, count, quiet));
    }
    Ok(())
}
