//! Group registry
//!
//! Owns every group of a session, keyed by name. Adding a group under an
//! existing name replaces it outright.

use std::collections::HashMap;
use std::path::PathBuf;

use super::error::GroupError;
use super::types::{Group, GroupSpec};

/// Name-keyed collection of groups
///
/// # Examples
///
/// ```no_run
/// use topictag::groups::{FilterSpec, GroupSpec, Registry};
///
/// let mut registry = Registry::new();
/// registry.add_group(GroupSpec {
///     name: "notes".into(),
///     base_directory: "~/notes".into(),
///     include: FilterSpec::Glob("*.org".into()),
///     ..GroupSpec::default()
/// }).unwrap();
/// registry.select("notes").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    groups: HashMap<String, Group>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a sequence of specs, later names winning.
    ///
    /// A spec that fails to compile is logged and left out, so one broken
    /// definition does not take the others down with it.
    #[must_use]
    pub fn from_specs<I>(specs: I) -> Self
    where
        I: IntoIterator<Item = GroupSpec>,
    {
        let mut registry = Self::new();
        for spec in specs {
            let name = spec.name.clone();
            if let Err(e) = registry.add_group(spec) {
                tracing::warn!(group = %name, error = %e, "skipping invalid group");
            }
        }
        registry
    }

    /// Discard every group.
    pub fn init(&mut self) {
        tracing::debug!(dropped = self.groups.len(), "registry reset");
        self.groups.clear();
    }

    /// Build a group from `spec` and resolve its files, without registering it.
    ///
    /// # Errors
    /// Returns `GroupError::Pattern` if a filter pattern is invalid.
    pub fn create_group(spec: GroupSpec) -> Result<Group, GroupError> {
        Group::from_spec(spec)
    }

    /// Create a group and register it, replacing any group of the same name.
    ///
    /// # Errors
    /// Returns `GroupError::Pattern` if a filter pattern is invalid; the
    /// registry is left unchanged in that case.
    pub fn add_group(&mut self, spec: GroupSpec) -> Result<&Group, GroupError> {
        let group = Self::create_group(spec)?;
        let name = group.name.clone();
        if self.groups.contains_key(&name) {
            tracing::debug!(group = %name, "replacing existing group");
        }
        self.groups.insert(name.clone(), group);
        self.get(&name)
    }

    /// Remove a group, returning it if it existed.
    pub fn delete_group(&mut self, name: &str) -> Option<Group> {
        self.groups.remove(name)
    }

    /// Mark a group as selected.
    ///
    /// # Errors
    /// Returns `GroupError::NotFound` if no group has that name.
    pub fn select(&mut self, name: &str) -> Result<(), GroupError> {
        self.get_mut(name)?.selected = true;
        Ok(())
    }

    /// Clear a group's selection mark.
    ///
    /// # Errors
    /// Returns `GroupError::NotFound` if no group has that name.
    pub fn deselect(&mut self, name: &str) -> Result<(), GroupError> {
        self.get_mut(name)?.selected = false;
        Ok(())
    }

    /// All selected groups, in no particular order
    #[must_use]
    pub fn selected(&self) -> Vec<&Group> {
        self.groups.values().filter(|g| g.selected).collect()
    }

    /// Names of the selected groups, sorted
    #[must_use]
    pub fn selected_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.selected().into_iter().map(|g| g.name.clone()).collect();
        names.sort();
        names
    }

    /// Look up a group by name.
    ///
    /// # Errors
    /// Returns `GroupError::NotFound` if no group has that name.
    pub fn get(&self, name: &str) -> Result<&Group, GroupError> {
        self.groups
            .get(name)
            .ok_or_else(|| GroupError::NotFound(name.to_string()))
    }

    /// Look up a group by name for modification.
    ///
    /// # Errors
    /// Returns `GroupError::NotFound` if no group has that name.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Group, GroupError> {
        self.groups
            .get_mut(name)
            .ok_or_else(|| GroupError::NotFound(name.to_string()))
    }

    /// Refresh one group's file list and return it.
    ///
    /// # Errors
    /// Returns `GroupError::NotFound` if no group has that name.
    pub fn scan_group(&mut self, name: &str) -> Result<&[PathBuf], GroupError> {
        Ok(self.get_mut(name)?.rescan())
    }

    /// Refresh every selected group, returning `(name, file count)` pairs
    /// sorted by name.
    pub fn scan_selected(&mut self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = self
            .groups
            .values_mut()
            .filter(|g| g.selected)
            .map(|g| {
                let count = g.rescan().len();
                (g.name.clone(), count)
            })
            .collect();
        counts.sort();
        counts
    }

    /// All group names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Groups sorted by name
    #[must_use]
    pub fn groups(&self) -> Vec<&Group> {
        let mut groups: Vec<&Group> = self.groups.values().collect();
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        groups
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
