//! Build error types.

use std::io;
use std::path::PathBuf;

use nsfile_core::{Action, NamespaceError, Operation};
use nsfile_parser::ParseError;
use thiserror::Error;

/// Result type for build operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can stop a build.
///
/// Operation-level variants carry the operation's position in its script
/// (`index`, 0-based) and its source line.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("clearing the name space failed: {source}")]
    Reset {
        #[source]
        source: NamespaceError,
    },

    #[error("line {line}: {action} expects {expected} operand(s), got {found}")]
    Arity {
        index: usize,
        line: usize,
        action: Action,
        expected: &'static str,
        found: usize,
    },

    #[error("line {line}: {action} failed: {source}")]
    Apply {
        index: usize,
        line: usize,
        action: Action,
        #[source]
        source: NamespaceError,
    },

    #[error("line {line}: cannot include {path}: {source}")]
    Include {
        index: usize,
        line: usize,
        path: String,
        #[source]
        source: IncludeError,
    },

    #[error("line {line}: in {path}: {source}")]
    Nested {
        index: usize,
        line: usize,
        path: String,
        #[source]
        source: Box<BuildError>,
    },
}

impl BuildError {
    pub fn arity(index: usize, op: &Operation, expected: &'static str) -> Self {
        Self::Arity {
            index,
            line: op.line,
            action: op.action,
            expected,
            found: op.operands.len(),
        }
    }

    pub fn apply(index: usize, op: &Operation, source: NamespaceError) -> Self {
        Self::Apply {
            index,
            line: op.line,
            action: op.action,
            source,
        }
    }

    pub fn include(
        index: usize,
        op: &Operation,
        path: impl Into<String>,
        source: IncludeError,
    ) -> Self {
        Self::Include {
            index,
            line: op.line,
            path: path.into(),
            source,
        }
    }

    pub fn nested(
        index: usize,
        op: &Operation,
        path: impl Into<String>,
        source: BuildError,
    ) -> Self {
        Self::Nested {
            index,
            line: op.line,
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Position of the failing operation in the top-level script.
    pub fn index(&self) -> Option<usize> {
        match self {
            BuildError::Arity { index, .. }
            | BuildError::Apply { index, .. }
            | BuildError::Include { index, .. }
            | BuildError::Nested { index, .. } => Some(*index),
            BuildError::Parse(_) | BuildError::Reset { .. } => None,
        }
    }

    /// Source line of the failing operation in the top-level script.
    pub fn line(&self) -> Option<usize> {
        match self {
            BuildError::Arity { line, .. }
            | BuildError::Apply { line, .. }
            | BuildError::Include { line, .. }
            | BuildError::Nested { line, .. } => Some(*line),
            BuildError::Parse(e) => Some(e.line()),
            BuildError::Reset { .. } => None,
        }
    }

    /// The action that failed, looking through nested includes.
    pub fn action(&self) -> Option<Action> {
        match self {
            BuildError::Arity { action, .. } | BuildError::Apply { action, .. } => Some(*action),
            BuildError::Include { .. } => Some(Action::Include),
            BuildError::Nested { source, .. } => source.action(),
            BuildError::Reset { .. } => Some(Action::Reset),
            BuildError::Parse(_) => None,
        }
    }
}

/// Errors a `ScriptLoader` reports for a `.` include.
#[derive(Debug, Error)]
pub enum IncludeError {
    #[error("includes are not supported without a script loader")]
    Unsupported,

    #[error("include depth limit of {limit} exceeded")]
    DepthExceeded { limit: usize },

    #[error("{} is already being included", path.display())]
    Cycle { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
