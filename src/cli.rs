//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for topictag using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **groups**: list, show, add, remove, select and deselect groups
//! - **scan**: refresh the file lists of groups
//! - **index**: refresh groups and run the external indexer over them
//! - **tags**: list the tags found in a file
//! - **next** / **prev**: locate the next or previous occurrence of a tag
//! - **choose**: pick the tag under or before a cursor offset
//! - **seek**: group-wide tag seeking (not available yet)
//! - **config**: create or locate the configuration file
//!
//! # Examples
//!
//! ```bash
//! topictag groups list
//! topictag scan notes
//! topictag index            # every selected group
//! topictag tags src/lib.rs --all
//! topictag next notes.org parser-state --at 120 --no-wrap
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PathFormat;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "topictag")]
#[command(
    about = "Inline topic tags: file groups, tag navigation and index generation",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log diagnostics to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Display absolute paths (overrides config)
    #[arg(long = "absolute", global = true, conflicts_with = "relative")]
    pub absolute: bool,

    /// Display relative paths (overrides config)
    #[arg(long = "relative", global = true, conflicts_with = "absolute")]
    pub relative: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Path format requested on the command line, falling back to `default`
    #[must_use]
    pub const fn path_format(&self, default: PathFormat) -> PathFormat {
        if self.absolute {
            PathFormat::Absolute
        } else if self.relative {
            PathFormat::Relative
        } else {
            default
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage group definitions
    #[command(visible_alias = "g")]
    Groups {
        #[command(subcommand)]
        command: GroupsCommands,
    },

    /// Refresh the file lists of groups (selected groups when none are named)
    #[command(visible_alias = "s")]
    Scan {
        /// Groups to scan
        #[arg(value_name = "GROUP")]
        groups: Vec<String>,
    },

    /// Refresh groups and run the indexer over them (selected groups when none are named)
    #[command(visible_alias = "i")]
    Index {
        /// Groups to index
        #[arg(value_name = "GROUP")]
        groups: Vec<String>,

        /// Indexer program (overrides config)
        #[arg(short = 'p', long = "program", value_name = "PROGRAM")]
        program: Option<String>,

        /// Kill the indexer after this many seconds (overrides config)
        #[arg(long = "timeout", value_name = "SECS")]
        timeout: Option<u64>,

        /// Print the indexer command lines without running them
        #[arg(short = 'n', long = "dry-run")]
        dry_run: bool,
    },

    /// List the tags found in a file
    #[command(visible_alias = "t")]
    Tags {
        /// File to scan
        file: PathBuf,

        /// Every occurrence in document order instead of the sorted distinct set
        #[arg(short = 'a', long = "all")]
        all: bool,
    },

    /// Find the next occurrence of a tag
    Next(NavArgs),

    /// Find the previous occurrence of a tag
    Prev(NavArgs),

    /// Pick the tag on the cursor's line, or the nearest one before it
    Choose {
        /// File to inspect
        file: PathBuf,

        /// Cursor byte offset
        #[arg(long = "at", value_name = "OFFSET", default_value_t = 0)]
        at: usize,
    },

    /// Jump to the next occurrence of a tag across a group's files
    Seek {
        /// Group to search
        group: String,

        /// Tag value
        tag: String,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Arguments shared by `next` and `prev`
#[derive(Args, Debug, Clone)]
pub struct NavArgs {
    /// File to search
    pub file: PathBuf,

    /// Tag value (matched literally)
    pub tag: String,

    /// Cursor byte offset to search from
    #[arg(long = "at", value_name = "OFFSET", default_value_t = 0)]
    pub at: usize,

    /// Do not wrap around the end (or start) of the file
    #[arg(long = "no-wrap")]
    pub no_wrap: bool,

    /// Fail with an error when no occurrence exists
    #[arg(long = "strict")]
    pub strict: bool,

    /// Byte offset limiting the search before any wraparound
    #[arg(long = "bound", value_name = "OFFSET")]
    pub bound: Option<usize>,
}

/// Group management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum GroupsCommands {
    /// List groups
    #[command(visible_alias = "ls")]
    List {
        /// Only selected groups
        #[arg(short = 's', long = "selected")]
        selected: bool,

        /// Print JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show a group and its files
    Show {
        /// Group name
        name: String,

        /// Print JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Add a group to the configuration (replaces a group of the same name)
    Add(GroupAddArgs),

    /// Remove a group from the configuration
    #[command(visible_alias = "rm")]
    Remove {
        /// Group name
        name: String,
    },

    /// Mark a group as selected
    Select {
        /// Group name
        name: String,
    },

    /// Clear a group's selection mark
    Deselect {
        /// Group name
        name: String,
    },
}

/// Arguments for `groups add`
#[derive(Args, Debug, Clone)]
pub struct GroupAddArgs {
    /// Group name
    pub name: String,

    /// Base directory of the group
    #[arg(short = 'b', long = "base", value_name = "DIR")]
    pub base: PathBuf,

    /// Include files matching a glob
    #[arg(long = "glob", value_name = "GLOB", conflicts_with_all = ["regex", "files"])]
    pub glob: Option<String>,

    /// Include files matching a regex
    #[arg(long = "regex", value_name = "REGEX", conflicts_with_all = ["glob", "files"])]
    pub regex: Option<String>,

    /// Include exactly these files
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        num_args = 1..,
        conflicts_with_all = ["glob", "regex"]
    )]
    pub files: Vec<String>,

    /// Exclude files matching a glob
    #[arg(long = "exclude-glob", value_name = "GLOB", conflicts_with = "exclude")]
    pub exclude_glob: Option<String>,

    /// Exclude exactly these files
    #[arg(short = 'e', long = "exclude", value_name = "FILE", num_args = 1..)]
    pub exclude: Vec<String>,

    /// File kind (lisp, text, org, ...)
    #[arg(long = "format", value_name = "FORMAT", default_value = "text")]
    pub format: String,

    /// Human-readable description
    #[arg(short = 'd', long = "description")]
    pub description: Option<String>,

    /// Index file name (default TAGS)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Extra argument for the indexer (repeatable)
    #[arg(long = "indexer-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub indexer_args: Vec<String>,

    /// Select the group right away
    #[arg(short = 's', long = "select")]
    pub select: bool,
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Write a default configuration file
    Init,

    /// Print the configuration file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_next_with_flags() {
        let cli = Cli::try_parse_from([
            "topictag", "next", "notes.org", "todo", "--at", "42", "--no-wrap", "--strict",
        ])
        .unwrap();
        match cli.command {
            Commands::Next(args) => {
                assert_eq!(args.file, PathBuf::from("notes.org"));
                assert_eq!(args.tag, "todo");
                assert_eq!(args.at, 42);
                assert!(args.no_wrap);
                assert!(args.strict);
                assert!(args.bound.is_none());
            }
            other => panic!("Expected next command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_index_without_groups() {
        let cli = Cli::try_parse_from(["topictag", "-q", "index", "--dry-run"]).unwrap();
        assert!(cli.quiet);
        match cli.command {
            Commands::Index { groups, dry_run, program, .. } => {
                assert!(groups.is_empty());
                assert!(dry_run);
                assert!(program.is_none());
            }
            other => panic!("Expected index command, got {other:?}"),
        }
    }

    #[test]
    fn test_group_add_include_forms_conflict() {
        let result = Cli::try_parse_from([
            "topictag", "groups", "add", "g", "--base", ".", "--glob", "*.txt", "--regex", "txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_path_format_override() {
        let cli = Cli::try_parse_from(["topictag", "--relative", "groups", "list"]).unwrap();
        assert_eq!(cli.path_format(PathFormat::Absolute), PathFormat::Relative);
        let cli = Cli::try_parse_from(["topictag", "groups", "list"]).unwrap();
        assert_eq!(cli.path_format(PathFormat::Relative), PathFormat::Relative);
    }
}
