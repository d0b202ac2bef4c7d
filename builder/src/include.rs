//! Script loading for `.` includes.
//!
//! The builder never opens files itself. It asks a `ScriptLoader` for the
//! nested script, applies it in place, then tells the loader it is done.
//! Depth limits and cycle detection belong to the loader.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use nsfile_core::Script;
use nsfile_parser::parse_reader;

use crate::config::NsConfig;
use crate::error::IncludeError;

/// Resolves `.` includes to parsed scripts.
pub trait ScriptLoader {
    /// Load the script named by an include operand and mark it as in progress.
    fn enter(&mut self, path: &str) -> Result<Script, IncludeError>;

    /// Called once the script returned by the matching `enter` has been applied
    /// (or has failed).
    fn leave(&mut self, path: &str);
}

/// Loads included namespace files from the host filesystem.
#[derive(Debug)]
pub struct FsLoader {
    base_dir: Option<PathBuf>,
    max_depth: usize,
    root: Option<PathBuf>,
    /// Canonical paths of the includes currently being applied, innermost last.
    stack: Vec<PathBuf>,
}

impl Default for FsLoader {
    fn default() -> Self {
        Self::from_config(&NsConfig::default())
    }
}

impl FsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &NsConfig) -> Self {
        Self {
            base_dir: config.base_dir.clone(),
            max_depth: config.max_include_depth,
            root: None,
            stack: Vec::new(),
        }
    }

    /// Register the top-level file so that including it again is a cycle.
    pub fn with_root(mut self, path: &Path) -> Self {
        self.root = fs::canonicalize(path).ok();
        self
    }

    /// Number of includes currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ScriptLoader for FsLoader {
    fn enter(&mut self, path: &str) -> Result<Script, IncludeError> {
        let resolved = self.resolve(path);
        let canonical = fs::canonicalize(&resolved).map_err(|source| IncludeError::Read {
            path: resolved.clone(),
            source,
        })?;

        if self.root.as_ref() == Some(&canonical) || self.stack.contains(&canonical) {
            return Err(IncludeError::Cycle { path: canonical });
        }
        if self.stack.len() >= self.max_depth {
            return Err(IncludeError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        let file = File::open(&canonical).map_err(|source| IncludeError::Read {
            path: canonical.clone(),
            source,
        })?;
        let script = parse_reader(file).map_err(|source| IncludeError::Parse {
            path: canonical.clone(),
            source,
        })?;

        tracing::debug!(
            path = %canonical.display(),
            depth = self.stack.len() + 1,
            operations = script.len(),
            "entering include"
        );
        self.stack.push(canonical);
        Ok(script)
    }

    fn leave(&mut self, path: &str) {
        if let Some(done) = self.stack.pop() {
            tracing::debug!(path, resolved = %done.display(), "leaving include");
        }
    }
}
