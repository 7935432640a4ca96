//! File discovery for pattern-based group includes
//!
//! Lists a single directory (no recursion) and keeps the regular files whose
//! names match a [`FilePattern`]. Names are sorted so repeated scans of an
//! unchanged directory produce identical lists.

mod traits;

pub use traits::FileDiscovery;

use std::fs;
use std::path::Path;

use crate::patterns::FilePattern;

/// Non-recursive directory listing filtered by a file pattern
#[derive(Debug, Clone)]
pub struct DirectoryDiscovery<'a> {
    pattern: &'a FilePattern,
}

impl<'a> DirectoryDiscovery<'a> {
    #[must_use]
    pub const fn new(pattern: &'a FilePattern) -> Self {
        Self { pattern }
    }
}

impl FileDiscovery for DirectoryDiscovery<'_> {
    fn discover(&self, root: &Path) -> Vec<String> {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(root = %root.display(), error = %e, "base directory not readable");
                return Vec::new();
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(
                        root = %root.display(),
                        error = %e,
                        "failed to read directory entry"
                    );
                    continue;
                }
            };
            // Follows symlinks so linked files count as members.
            if !entry.path().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 filename");
                continue;
            };
            if self.pattern.matches(&name) {
                names.push(name);
            }
        }
        names.sort();

        tracing::debug!(
            root = %root.display(),
            pattern = self.pattern.original(),
            found = names.len(),
            "discovered files"
        );
        names
    }
}
