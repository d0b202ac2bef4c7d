//! Namespace capability error types.

use thiserror::Error;

use crate::Action;

/// Result type for namespace capability calls.
pub type NamespaceResult<T> = Result<T, NamespaceError>;

/// Errors a namespace capability can report.
#[derive(Debug, Error)]
pub enum NamespaceError {
    #[error("not mounted: {path}")]
    NotMounted { path: String },

    #[error("invalid spec: {message}")]
    InvalidSpec { message: String },

    #[error("{action} is not supported on this platform")]
    Unsupported { action: Action },

    #[error("{message}")]
    Other { message: String },
}

impl NamespaceError {
    pub fn not_mounted(path: impl Into<String>) -> Self {
        Self::NotMounted { path: path.into() }
    }

    pub fn invalid_spec(message: impl Into<String>) -> Self {
        Self::InvalidSpec {
            message: message.into(),
        }
    }

    pub fn unsupported(action: Action) -> Self {
        Self::Unsupported { action }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
