//! nsfile Builder
//!
//! Replay a parsed `Script` against a `Namespace` capability.
//!
//! Responsibilities:
//! - Dispatch each operation to the matching capability call
//! - Check operand counts per action
//! - Stop at the first failure and report which operation caused it
//! - Hand `.` includes to a `ScriptLoader`
//!
//! # Module Structure
//!
//! - `builder` - The `Builder` dispatch loop
//! - `ops/` - Per-action operand handling (bind, mount, unmount, import, ...)
//! - `include` - The `ScriptLoader` collaborator and the filesystem loader
//! - `ns` - `new_ns` / `add_ns` entry points that read a namespace file
//! - `config` - Build configuration
//! - `error` - Error types for build failures
//! - `result` - Build summaries

mod builder;
mod config;
mod error;
mod include;
mod ns;
mod ops;
mod result;

pub use builder::Builder;
pub use config::{NsConfig, DEFAULT_MAX_INCLUDE_DEPTH, DEFAULT_NAMESPACE_FILE};
pub use error::{BuildError, BuildResult, IncludeError};
pub use include::{FsLoader, ScriptLoader};
pub use ns::{add_ns, new_ns};
pub use result::BuildSummary;
