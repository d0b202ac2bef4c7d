//! Recording namespace for tests and dry runs.

use nsfile_core::{Action, Namespace, NamespaceError, NamespaceResult, Placement};

/// One capability call, with owned arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Bind {
        new: String,
        old: String,
        placement: Placement,
    },
    Mount {
        server: String,
        old: String,
        spec: Option<String>,
        placement: Placement,
    },
    Unmount {
        new: Option<String>,
        old: String,
    },
    Clear,
    Chdir {
        dir: String,
    },
    Import {
        host: String,
        remote_path: Option<String>,
        mountpoint: String,
        placement: Placement,
    },
}

impl Call {
    /// The action that issues this call.
    pub fn action(&self) -> Action {
        match self {
            Call::Bind { .. } => Action::Splice,
            Call::Mount { .. } => Action::Mount,
            Call::Unmount { .. } => Action::Unmount,
            Call::Clear => Action::Reset,
            Call::Chdir { .. } => Action::ChangeDir,
            Call::Import { .. } => Action::Import,
        }
    }
}

/// Records every call in order and changes nothing.
///
/// `fail_at(n)` makes the n-th call (0-based) fail after it is recorded.
#[derive(Debug, Default)]
pub struct RecordingNamespace {
    calls: Vec<Call>,
    fail_at: Option<usize>,
}

impl RecordingNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    fn record(&mut self, call: Call) -> NamespaceResult<()> {
        let n = self.calls.len();
        let action = call.action();
        self.calls.push(call);
        if self.fail_at == Some(n) {
            return Err(NamespaceError::other(format!(
                "injected failure on call {} ({})",
                n, action
            )));
        }
        Ok(())
    }
}

impl Namespace for RecordingNamespace {
    fn bind(&mut self, new: &str, old: &str, placement: Placement) -> NamespaceResult<()> {
        self.record(Call::Bind {
            new: new.to_string(),
            old: old.to_string(),
            placement,
        })
    }

    fn mount(
        &mut self,
        server: &str,
        old: &str,
        spec: Option<&str>,
        placement: Placement,
    ) -> NamespaceResult<()> {
        self.record(Call::Mount {
            server: server.to_string(),
            old: old.to_string(),
            spec: spec.map(str::to_string),
            placement,
        })
    }

    fn unmount(&mut self, new: Option<&str>, old: &str) -> NamespaceResult<()> {
        self.record(Call::Unmount {
            new: new.map(str::to_string),
            old: old.to_string(),
        })
    }

    fn clear(&mut self) -> NamespaceResult<()> {
        self.record(Call::Clear)
    }

    fn chdir(&mut self, dir: &str) -> NamespaceResult<()> {
        self.record(Call::Chdir {
            dir: dir.to_string(),
        })
    }

    fn import(
        &mut self,
        host: &str,
        remote_path: Option<&str>,
        mountpoint: &str,
        placement: Placement,
    ) -> NamespaceResult<()> {
        self.record(Call::Import {
            host: host.to_string(),
            remote_path: remote_path.map(str::to_string),
            mountpoint: mountpoint.to_string(),
            placement,
        })
    }
}
