//! Build configuration.

use std::path::PathBuf;

/// Namespace file read when none is named.
pub const DEFAULT_NAMESPACE_FILE: &str = "/lib/namespace";

/// How deep `.` includes may nest below the top-level file.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 8;

/// Settings for `new_ns` / `add_ns` and the filesystem loader.
#[derive(Debug, Clone)]
pub struct NsConfig {
    pub namespace_file: PathBuf,
    pub max_include_depth: usize,
    /// Directory relative include paths are resolved against.
    /// `None` uses the process working directory.
    pub base_dir: Option<PathBuf>,
}

impl Default for NsConfig {
    fn default() -> Self {
        Self {
            namespace_file: PathBuf::from(DEFAULT_NAMESPACE_FILE),
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
            base_dir: None,
        }
    }
}

impl NsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.namespace_file = path.into();
        self
    }

    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }
}
