//! Namespace-affecting actions.

use std::fmt;

/// An action a namespace file line can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `bind`: splice one file tree onto another path.
    Splice,
    /// `mount`: attach a service-provided file tree.
    Mount,
    /// `unmount`: tear down a splice or mount.
    Unmount,
    /// `clear`: reset the namespace to empty.
    Reset,
    /// `cd`: change the current directory.
    ChangeDir,
    /// `.`: interpret another namespace file in place.
    Include,
    /// `import`: attach a file tree served by a remote host.
    Import,
}

impl Action {
    /// Every action, in keyword-table order.
    pub const ALL: [Action; 7] = [
        Action::Splice,
        Action::Mount,
        Action::Unmount,
        Action::Reset,
        Action::ChangeDir,
        Action::Include,
        Action::Import,
    ];

    /// The script keyword that selects this action.
    pub fn keyword(self) -> &'static str {
        match self {
            Action::Splice => "bind",
            Action::Mount => "mount",
            Action::Unmount => "unmount",
            Action::Reset => "clear",
            Action::ChangeDir => "cd",
            Action::Include => ".",
            Action::Import => "import",
        }
    }

    /// Look up an action by its exact (case-sensitive) keyword.
    pub fn from_keyword(keyword: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.keyword() == keyword)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
