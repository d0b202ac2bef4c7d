//! Namespace for platforms without per-process name spaces.

use nsfile_core::{Action, Namespace, NamespaceError, NamespaceResult, Placement};

/// Refuses every call with `NamespaceError::Unsupported`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedNamespace;

impl Namespace for UnsupportedNamespace {
    fn bind(&mut self, _new: &str, _old: &str, _placement: Placement) -> NamespaceResult<()> {
        Err(NamespaceError::unsupported(Action::Splice))
    }

    fn mount(
        &mut self,
        _server: &str,
        _old: &str,
        _spec: Option<&str>,
        _placement: Placement,
    ) -> NamespaceResult<()> {
        Err(NamespaceError::unsupported(Action::Mount))
    }

    fn unmount(&mut self, _new: Option<&str>, _old: &str) -> NamespaceResult<()> {
        Err(NamespaceError::unsupported(Action::Unmount))
    }

    fn clear(&mut self) -> NamespaceResult<()> {
        Err(NamespaceError::unsupported(Action::Reset))
    }

    fn chdir(&mut self, _dir: &str) -> NamespaceResult<()> {
        Err(NamespaceError::unsupported(Action::ChangeDir))
    }

    fn import(
        &mut self,
        _host: &str,
        _remote_path: Option<&str>,
        _mountpoint: &str,
        _placement: Placement,
    ) -> NamespaceResult<()> {
        Err(NamespaceError::unsupported(Action::Import))
    }
}
