//! File-set resolution
//!
//! Turns a group's include/exclude rules into an ordered, deduplicated list
//! of absolute paths. Missing directories and files are not errors; they
//! simply contribute nothing.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use super::types::Group;
use crate::discovery::{DirectoryDiscovery, FileDiscovery};
use crate::patterns::{Filter, filter_out};

/// Resolve the group's current file set.
///
/// Exclusion is matched against the same names inclusion produced: the bare
/// filename for pattern includes, the entry as written for list includes.
#[must_use]
pub fn resolve_files(group: &Group) -> Vec<PathBuf> {
    let names = match &group.include {
        None => Vec::new(),
        Some(Filter::Pattern(pattern)) => {
            DirectoryDiscovery::new(pattern).discover(&group.base_directory)
        }
        Some(Filter::List(names)) => names.clone(),
    };
    let names = filter_out(names, group.exclude.as_ref());

    let mut seen = HashSet::with_capacity(names.len());
    let files: Vec<PathBuf> = names
        .iter()
        .map(|name| absolutize(&group.base_directory.join(name)))
        .filter(|path| seen.insert(path.clone()))
        .collect();

    tracing::debug!(
        group = %group.name,
        base = %group.base_directory.display(),
        files = files.len(),
        "resolved file set"
    );
    files
}

/// Make `path` absolute and normalize `.`/`..` lexically, without touching
/// the filesystem.
///
/// A leading `~` component is replaced by the home directory. Any other
/// relative path is taken against the working directory.
#[must_use]
pub fn absolutize(path: &Path) -> PathBuf {
    let expanded = expand_home(path);
    let joined = if expanded.is_absolute() {
        expanded
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(&expanded),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read working directory");
                expanded
            }
        }
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Replace a leading `~` component with the home directory.
///
/// `~user` forms are left alone, as is everything when no home directory
/// can be determined.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    if let Some(rest) = home_relative(path) {
        match dirs::home_dir() {
            Some(home) => return home.join(rest),
            None => tracing::warn!(path = %path.display(), "no home directory to expand '~'"),
        }
    }
    path.to_path_buf()
}

/// Anchor a relative `path` at `dir`; absolute and `~` paths are kept.
#[must_use]
pub fn anchor(path: &Path, dir: &Path) -> PathBuf {
    if path.is_absolute() || home_relative(path).is_some() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}

fn home_relative(path: &Path) -> Option<&Path> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => Some(components.as_path()),
        _ => None,
    }
}
