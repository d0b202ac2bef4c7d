//! Parser error types.

use std::fmt;
use std::io;

/// A parse error with location information.
#[derive(Debug)]
pub enum ParseError {
    /// The first field of a line is not an action keyword.
    UnknownAction { line: usize, keyword: String },
    /// The input could not be read to the end.
    Read { line: usize, source: io::Error },
}

impl ParseError {
    pub fn unknown_action(line: usize, keyword: impl Into<String>) -> Self {
        Self::UnknownAction {
            line,
            keyword: keyword.into(),
        }
    }

    pub fn read(line: usize, source: io::Error) -> Self {
        Self::Read { line, source }
    }

    /// The 1-based line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnknownAction { line, .. } | ParseError::Read { line, .. } => *line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownAction { line, keyword } => {
                write!(f, "Parse error at line {}: unknown action '{}'", line, keyword)
            }
            ParseError::Read { line, source } => {
                write!(f, "Read error at line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Read { source, .. } => Some(source),
            ParseError::UnknownAction { .. } => None,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
