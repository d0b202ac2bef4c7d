//! Line classification and field splitting for namespace files.

/// How a source line is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// No fields at all.
    Blank,
    /// `#` in the first column.
    Comment,
    /// A space in the first column; the whole line is ignored.
    Indented,
    /// Anything else: one operation.
    Command,
}

impl LineKind {
    pub fn is_ignored(self) -> bool {
        !matches!(self, LineKind::Command)
    }
}

/// Classify a line, with its terminator already removed.
///
/// Only the first byte matters for comments and indented lines; a `#` later
/// in the line is an ordinary field character.
pub fn classify(line: &str) -> LineKind {
    match line.as_bytes().first() {
        None => LineKind::Blank,
        Some(b'#') => LineKind::Comment,
        Some(b' ') => LineKind::Indented,
        // Tab-led lines are commands unless they hold nothing but whitespace.
        Some(_) if fields(line).next().is_none() => LineKind::Blank,
        Some(_) => LineKind::Command,
    }
}

/// Split a line into fields on runs of ASCII whitespace. No field is empty.
pub fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split_ascii_whitespace()
}
