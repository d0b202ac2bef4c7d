//! Parsed operations and scripts.

use std::fmt;

use crate::{Action, Placement};

/// One parsed namespace file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub action: Action,
    pub placement: Placement,
    /// Positional arguments left after the keyword and flag token.
    pub operands: Vec<String>,
    /// 1-based source line; 0 for operations built in code.
    pub line: usize,
}

impl Operation {
    pub fn new(action: Action, placement: Placement, operands: Vec<String>) -> Self {
        Self {
            action,
            placement,
            operands,
            line: 0,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Get an operand by position.
    pub fn operand(&self, index: usize) -> Option<&str> {
        self.operands.get(index).map(String::as_str)
    }
}

/// Renders the canonical script line: `keyword [-flags] operands...`.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action.keyword())?;
        let flags = self.placement.flag_string();
        let dashed_operand = self.operands.first().is_some_and(|o| o.starts_with('-'));
        if !flags.is_empty() || dashed_operand {
            // A bare `-` keeps a leading dashed operand from reading as flags.
            write!(f, " -{}", flags)?;
        }
        for operand in &self.operands {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}

/// An ordered list of operations, in source line order.
///
/// Order is significant: later operations see the namespace left by earlier
/// ones, and it decides the search order of union members.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    operations: Vec<Operation>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: Operation) {
        self.operations.push(op);
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

impl From<Vec<Operation>> for Script {
    fn from(operations: Vec<Operation>) -> Self {
        Self { operations }
    }
}

impl FromIterator<Operation> for Script {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Script {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

/// One rendered line per operation, each newline-terminated.
impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.operations {
            writeln!(f, "{}", op)?;
        }
        Ok(())
    }
}
