//! nsfile Namespace implementations
//!
//! Capability implementations selected by the caller at composition time:
//! - `MemoryNamespace` - an in-process union-directory mount table
//! - `RecordingNamespace` - records every call, optionally failing one
//! - `UnsupportedNamespace` - refuses every call, for platforms without name spaces

mod memory;
mod path;
mod recording;
mod unsupported;

pub use memory::{MemoryNamespace, Source, UnionMember};
pub use path::normalize;
pub use recording::{Call, RecordingNamespace};
pub use unsupported::UnsupportedNamespace;
