//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including path display formatting and group/tag formatting.

use crate::config::PathFormat;
use crate::groups::Group;
use crate::navigate::{Span, line_column};
use colored::Colorize;
use std::path::Path;

/// Format a path according to the display mode
#[must_use]
pub fn format_path(path: &Path, format: PathFormat) -> String {
    match format {
        PathFormat::Absolute => path.display().to_string(),
        PathFormat::Relative => {
            if let Ok(cwd) = std::env::current_dir()
                && let Ok(rel_path) = path.strip_prefix(&cwd)
            {
                return rel_path.display().to_string();
            }
            // Fallback to absolute if relative path cannot be computed
            path.display().to_string()
        }
    }
}

/// Color a path based on file existence (green if exists, red if missing)
#[must_use]
pub fn colorize_path(path: &Path, format: PathFormat) -> String {
    let formatted = format_path(path, format);
    if path.exists() {
        formatted.green().to_string()
    } else {
        formatted.red().to_string()
    }
}

/// One-line summary of a group
#[must_use]
pub fn group_summary(group: &Group, format: PathFormat, quiet: bool) -> String {
    if quiet {
        return group.name.clone();
    }
    let marker = if group.selected { "*".green().to_string() } else { " ".to_string() };
    let description = group
        .description
        .as_deref()
        .map(|d| format!(" - {d}"))
        .unwrap_or_default();
    format!(
        "{marker} {} [{}] {} ({} file(s)){description}",
        group.name.bold(),
        group.format,
        format_path(&group.base_directory, format),
        group.files.len()
    )
}

/// `path:line:column` location of a span, as editors and grep print it
#[must_use]
pub fn location(path: &Path, text: &str, span: Span, format: PathFormat) -> String {
    let (line, column) = line_column(text, span.start);
    format!("{}:{line}:{column}", format_path(path, format))
}

/// Format a tag with its occurrence count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} ({count} occurrence(s))")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_absolute_format_unchanged() {
        let path = PathBuf::from("/srv/notes/a.org");
        assert_eq!(format_path(&path, PathFormat::Absolute), "/srv/notes/a.org");
    }

    #[test]
    fn test_relative_format_strips_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let path = cwd.join("sub").join("file.txt");
        assert_eq!(
            format_path(&path, PathFormat::Relative),
            PathBuf::from("sub").join("file.txt").display().to_string()
        );
    }

    #[test]
    fn test_location_is_one_based() {
        let text = "x\n  <: t :>";
        let out = location(Path::new("/f.txt"), text, Span::new(4, 11), PathFormat::Absolute);
        assert_eq!(out, "/f.txt:2:3");
    }

    #[test]
    fn test_tag_with_count_quiet() {
        assert_eq!(tag_with_count("todo", 3, true), "todo");
        assert_eq!(tag_with_count("todo", 3, false), "  todo (3 occurrence(s))");
    }
}
