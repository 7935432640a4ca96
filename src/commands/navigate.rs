//! Navigation commands - next, prev, choose and seek

use std::path::Path;

use super::{Session, read_text};
use crate::{
    TopicTagError,
    cli::NavArgs,
    navigate::{self, Direction, SearchOptions, Span},
    output,
};

type Result<T> = std::result::Result<T, TopicTagError>;

/// Locate the next occurrence of a tag and print its location
///
/// # Errors
/// Returns an error if the file cannot be read, the tag is empty, or no
/// occurrence exists and `--strict` was given.
pub fn next(session: &Session, args: &NavArgs) -> Result<()> {
    search(session, args, Direction::Forward)
}

/// Locate the previous occurrence of a tag and print its location
///
/// # Errors
/// Same as [`next`].
pub fn prev(session: &Session, args: &NavArgs) -> Result<()> {
    search(session, args, Direction::Backward)
}

fn search(session: &Session, args: &NavArgs, direction: Direction) -> Result<()> {
    let text = read_text(&args.file)?;
    let options = SearchOptions {
        no_error: !args.strict,
        no_wrap: args.no_wrap,
        bound: args.bound,
    };

    let found = navigate::find_occurrence(&text, args.at, &args.tag, direction, options)?;
    report(session, &args.file, &text, &args.tag, found, direction);
    Ok(())
}

fn report(
    session: &Session,
    file: &Path,
    text: &str,
    tag: &str,
    found: Option<Span>,
    direction: Direction,
) {
    match found {
        Some(span) => {
            let place = output::location(file, text, span, session.path_format);
            if session.quiet {
                println!("{place}");
            } else {
                println!("{place} (cursor {})", span.landing(direction));
            }
        }
        None => {
            if !session.quiet {
                println!("No occurrence of tag '{tag}'");
            }
        }
    }
}

/// Print the tag a navigation would default to at `at`
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn choose(session: &Session, file: &Path, at: usize) -> Result<()> {
    let text = read_text(file)?;
    let line = navigate::line_bounds(&text, at);

    match navigate::auto_choose_tag(&text, at, line) {
        Some(tag) => println!("{tag}"),
        None => {
            if !session.quiet {
                println!("No tag on or before offset {at}");
            }
        }
    }
    Ok(())
}

/// Seek a tag across the files of a group
///
/// # Errors
/// Returns `TopicTagError::GroupError` for an unknown group and
/// `TopicTagError::NavigateError` otherwise, since group-wide seeking is not
/// available.
pub fn seek(session: &Session, group: &str, tag: &str) -> Result<()> {
    let group = session.registry.get(group)?;
    let (path, span) = navigate::seek_tag_in_group(group, tag)?;
    let text = read_text(&path)?;
    println!("{}", output::location(&path, &text, span, session.path_format));
    Ok(())
}
