//! nsfile Core Types
//!
//! This crate provides the foundational types shared by every nsfile component:
//! - The operation vocabulary (`Action`) and union placement flags (`Placement`)
//! - Parsed operations and scripts (`Operation`, `Script`)
//! - The namespace-mutation capability (`Namespace`) and its error type

mod action;
mod error;
mod namespace;
mod operation;
mod placement;

pub use action::*;
pub use error::*;
pub use namespace::*;
pub use operation::*;
pub use placement::*;
