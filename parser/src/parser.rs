//! Parser for namespace file text.
//!
//! Each non-ignored line becomes exactly one `Operation`. Arity is not
//! checked here; the builder reports it when the operation is applied.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use nsfile_core::{Action, Operation, Placement, Script};

use crate::error::{ParseError, ParseResult};
use crate::lexer::{classify, fields};

// ==================== PARSER STATE ====================

/// Incremental parser: feed it lines in order, then take the script.
#[derive(Debug, Default)]
pub struct Parser {
    script: Script,
    line: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the next source line.
    ///
    /// The first unknown keyword aborts; operations already produced are kept
    /// in the parser but callers are expected to discard them.
    pub fn feed_line(&mut self, text: &str) -> ParseResult<()> {
        self.line += 1;
        if let Some(op) = parse_line(self.line, text)? {
            tracing::trace!(line = self.line, op = %op, "parsed operation");
            self.script.push(op);
        }
        Ok(())
    }

    /// Number of lines fed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    pub fn finish(self) -> Script {
        self.script
    }
}

// ==================== LINE PARSING ====================

/// Parse one line into an operation. Ignored lines yield `None`.
pub fn parse_line(line: usize, text: &str) -> ParseResult<Option<Operation>> {
    if classify(text).is_ignored() {
        return Ok(None);
    }

    let mut fields = fields(text).peekable();
    let keyword = match fields.next() {
        Some(keyword) => keyword,
        None => return Ok(None),
    };
    let action =
        Action::from_keyword(keyword).ok_or_else(|| ParseError::unknown_action(line, keyword))?;

    let mut placement = Placement::REPLACE;
    if let Some(token) = fields.next_if(|f| f.starts_with('-')) {
        placement = parse_flags(&token[1..]);
    }

    let operands = fields.map(str::to_string).collect();
    Ok(Some(
        Operation::new(action, placement, operands).with_line(line),
    ))
}

/// Decode the characters of a flag token (without its leading `-`).
///
/// Characters accumulate; unknown ones are ignored.
fn parse_flags(chars: &str) -> Placement {
    let mut placement = Placement::REPLACE;
    for c in chars.chars() {
        if let Some(flag) = Placement::from_flag_char(c) {
            placement |= flag;
        }
    }
    placement
}

// ==================== PUBLIC API ====================

/// Parse namespace file text held in memory.
pub fn parse_str(input: &str) -> ParseResult<Script> {
    let mut parser = Parser::new();
    for line in input.lines() {
        parser.feed_line(line)?;
    }
    Ok(parser.finish())
}

/// Parse namespace file text from a reader.
///
/// A read failure part way through rejects the whole script.
pub fn parse_reader<R: Read>(reader: R) -> ParseResult<Script> {
    let mut parser = Parser::new();
    for line in BufReader::new(reader).lines() {
        let line = line.map_err(|e| ParseError::read(parser.lines_read() + 1, e))?;
        parser.feed_line(&line)?;
    }
    Ok(parser.finish())
}

/// Open and parse a namespace file.
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<Script> {
    let file = File::open(path.as_ref()).map_err(|e| ParseError::read(0, e))?;
    parse_reader(file)
}

// ==================== TESTS ====================
