//! nsfile Parser
//!
//! This crate turns namespace file text into a `Script`:
//! - Line classification (blank, comment and indented lines are skipped)
//! - Keyword lookup and flag-token decoding
//! - Error reporting with the offending line number

mod error;
mod lexer;
mod parser;

pub use error::*;
pub use lexer::{classify, fields, LineKind};
pub use parser::{parse_file, parse_line, parse_reader, parse_str, Parser};
