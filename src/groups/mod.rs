//! File groups
//!
//! A group is a named, declaratively defined set of files that share
//! indexing settings. Its definition (base directory plus include and
//! exclude rules) is resolved into a concrete list of absolute paths, which
//! stays fixed until the group is explicitly rescanned.

pub mod error;
pub mod registry;
pub mod resolve;
pub mod types;

pub use error::GroupError;
pub use registry::Registry;
pub use resolve::resolve_files;
pub use types::{DEFAULT_INDEX_FILE, FilterSpec, Group, GroupFormat, GroupSpec};
