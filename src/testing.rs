//! Testing utilities for topictag
//!
//! This module provides helper types for writing tests, mainly a `TestDir`
//! wrapper that lays out fixture files inside a temporary directory.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::groups::{FilterSpec, GroupSpec};

/// Temporary directory populated with fixture files, removed on drop
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create an empty temporary directory
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Create a temporary directory containing the given relative files
    ///
    /// Parent directories are created as needed. Each file gets
    /// "test content" written to it.
    ///
    /// # Panics
    /// Panics if any file cannot be written.
    #[must_use]
    pub fn with_files(names: &[&str]) -> Self {
        let dir = Self::new();
        for name in names {
            dir.write(name, "test content");
        }
        dir
    }

    /// Write `content` to `name` (relative to the directory) and return its path
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Get the path of the directory
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `name` inside the directory
    #[must_use]
    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Group spec rooted at this directory with a glob include
    #[must_use]
    pub fn glob_group(&self, name: &str, include: &str) -> GroupSpec {
        GroupSpec {
            name: name.to_string(),
            base_directory: self.path().to_path_buf(),
            include: FilterSpec::Glob(include.to_string()),
            ..GroupSpec::default()
        }
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
