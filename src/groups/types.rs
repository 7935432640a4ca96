//! Group data structures
//!
//! - `FilterSpec`: declarative include/exclude rule as written in config
//! - `GroupFormat`: informational file-kind symbol
//! - `GroupSpec`: everything needed to build a group
//! - `Group`: a spec with compiled filters and its last resolved file list

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::GroupError;
use super::resolve;
use crate::patterns::{FilePattern, Filter, PatternError};

/// Index file name used when a group does not configure one
pub const DEFAULT_INDEX_FILE: &str = "TAGS";

/// Include/exclude rule as declared in a group definition
///
/// In TOML a plain string is a glob (`include = "*.txt"`), a table with a
/// `regex` key is a regular expression (`include = { regex = "\\.el$" }`),
/// and an array is an explicit list of filenames.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FilterSpec {
    Glob(String),
    Regex { regex: String },
    List(Vec<String>),
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl FilterSpec {
    /// Compile into a [`Filter`]; an empty pattern string compiles to no filter.
    ///
    /// # Errors
    /// Returns `PatternError` if the glob or regex is invalid.
    pub fn compile(&self) -> Result<Option<Filter>, PatternError> {
        match self {
            Self::Glob(p) if p.is_empty() => Ok(None),
            Self::Regex { regex } if regex.is_empty() => Ok(None),
            Self::Glob(p) => Ok(Some(Filter::Pattern(FilePattern::glob(p)?))),
            Self::Regex { regex } => Ok(Some(Filter::Pattern(FilePattern::regex(regex)?))),
            Self::List(names) => Ok(Some(Filter::List(names.clone()))),
        }
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glob(p) => write!(f, "glob {p}"),
            Self::Regex { regex } => write!(f, "regex {regex}"),
            Self::List(names) => write!(f, "[{}]", names.join(", ")),
        }
    }
}

/// Kind of files a group holds
///
/// Purely descriptive; resolution and indexing ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroupFormat {
    Lisp,
    #[default]
    Text,
    Org,
    Other(String),
}

impl From<String> for GroupFormat {
    fn from(s: String) -> Self {
        match s.as_str() {
            "lisp" => Self::Lisp,
            "text" => Self::Text,
            "org" => Self::Org,
            _ => Self::Other(s),
        }
    }
}

impl From<GroupFormat> for String {
    fn from(format: GroupFormat) -> Self {
        format.to_string()
    }
}

impl fmt::Display for GroupFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lisp => f.write_str("lisp"),
            Self::Text => f.write_str("text"),
            Self::Org => f.write_str("org"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// Declarative group definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GroupSpec {
    /// Unique name of the group
    pub name: String,

    /// Root for relative filenames and pattern discovery
    pub base_directory: PathBuf,

    #[serde(default)]
    pub format: GroupFormat,

    /// Files belonging to the group
    #[serde(default)]
    pub include: FilterSpec,

    /// Files removed after inclusion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilterSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Index file name, relative to `base_directory` unless absolute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_output_file: Option<PathBuf>,

    /// Flags passed verbatim to the indexer before the file list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub index_extra_arguments: Vec<String>,

    /// Initial selection state
    #[serde(default)]
    pub selected: bool,
}

/// A group with compiled filters and its cached file list
///
/// `files` is a snapshot of the last resolution. It only changes through
/// [`Group::rescan`].
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub name: String,
    pub base_directory: PathBuf,
    pub format: GroupFormat,
    #[serde(skip)]
    pub include: Option<Filter>,
    #[serde(skip)]
    pub exclude: Option<Filter>,
    pub description: Option<String>,
    pub index_output_file: PathBuf,
    pub index_extra_arguments: Vec<String>,
    pub selected: bool,
    pub files: Vec<PathBuf>,
}

impl Group {
    /// Build a group from its spec and resolve its file set immediately.
    ///
    /// # Errors
    /// Returns `GroupError::Pattern` if an include or exclude pattern is invalid.
    pub fn from_spec(spec: GroupSpec) -> Result<Self, GroupError> {
        let compile = |filter: &FilterSpec| {
            filter.compile().map_err(|source| GroupError::Pattern {
                group: spec.name.clone(),
                source,
            })
        };
        let include = compile(&spec.include)?;
        let exclude = match &spec.exclude {
            Some(filter) => compile(filter)?,
            None => None,
        };

        let mut group = Self {
            base_directory: resolve::absolutize(&spec.base_directory),
            name: spec.name,
            format: spec.format,
            include,
            exclude,
            description: spec.description,
            index_output_file: spec
                .index_output_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_FILE)),
            index_extra_arguments: spec.index_extra_arguments,
            selected: spec.selected,
            files: Vec::new(),
        };
        group.rescan();
        Ok(group)
    }

    /// Recompute `files` from the filesystem, replacing the previous snapshot.
    pub fn rescan(&mut self) -> &[PathBuf] {
        self.files = resolve::resolve_files(self);
        tracing::debug!(group = %self.name, files = self.files.len(), "rescanned group");
        &self.files
    }

    /// Absolute path of the index file the indexer writes
    #[must_use]
    pub fn index_output_path(&self) -> PathBuf {
        resolve::absolutize(&self.base_directory.join(&self.index_output_file))
    }

    /// Whether `path` is part of the current snapshot
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f == path)
    }
}
