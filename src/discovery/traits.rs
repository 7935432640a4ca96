use std::path::Path;

/// Lists the names of matching entries under a root directory
pub trait FileDiscovery {
    /// Discover the names of matching entries directly inside `root`.
    ///
    /// Names are relative to `root` and returned in discovery order. An
    /// unreadable or missing `root` yields no names.
    fn discover(&self, root: &Path) -> Vec<String>;
}
