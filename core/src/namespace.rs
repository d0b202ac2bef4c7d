//! The namespace-mutation capability.
//!
//! Bind and mount modify the file name space of the process (and of the other
//! processes in its name space group). For every call, `old` names an existing
//! file or directory in the current name space where the change is made.
//! Builders receive a capability explicitly; nothing here is global.

use crate::{NamespaceResult, Placement};

/// One method per namespace-affecting primitive.
///
/// Implementations decide how each primitive is realized: kernel calls, an
/// in-memory model, a recorder for tests, or a stub that refuses everything.
/// Calls against one capability must be serialized by the caller.
pub trait Namespace {
    /// Splice `new` onto `old`.
    fn bind(&mut self, new: &str, old: &str, placement: Placement) -> NamespaceResult<()>;

    /// Mount the file tree served over `server` on `old`.
    ///
    /// `spec` selects among the trees the server offers.
    fn mount(
        &mut self,
        server: &str,
        old: &str,
        spec: Option<&str>,
        placement: Placement,
    ) -> NamespaceResult<()>;

    /// Unmount `new` from `old`, or everything mounted on `old` if `new` is absent.
    fn unmount(&mut self, new: Option<&str>, old: &str) -> NamespaceResult<()>;

    /// Reset the name space to empty.
    fn clear(&mut self) -> NamespaceResult<()>;

    /// Change the current directory.
    fn chdir(&mut self, dir: &str) -> NamespaceResult<()>;

    /// Import `remote_path` (the whole tree if absent) from `host` onto `mountpoint`.
    fn import(
        &mut self,
        host: &str,
        remote_path: Option<&str>,
        mountpoint: &str,
        placement: Placement,
    ) -> NamespaceResult<()>;
}

impl<N: Namespace + ?Sized> Namespace for &mut N {
    fn bind(&mut self, new: &str, old: &str, placement: Placement) -> NamespaceResult<()> {
        (**self).bind(new, old, placement)
    }

    fn mount(
        &mut self,
        server: &str,
        old: &str,
        spec: Option<&str>,
        placement: Placement,
    ) -> NamespaceResult<()> {
        (**self).mount(server, old, spec, placement)
    }

    fn unmount(&mut self, new: Option<&str>, old: &str) -> NamespaceResult<()> {
        (**self).unmount(new, old)
    }

    fn clear(&mut self) -> NamespaceResult<()> {
        (**self).clear()
    }

    fn chdir(&mut self, dir: &str) -> NamespaceResult<()> {
        (**self).chdir(dir)
    }

    fn import(
        &mut self,
        host: &str,
        remote_path: Option<&str>,
        mountpoint: &str,
        placement: Placement,
    ) -> NamespaceResult<()> {
        (**self).import(host, remote_path, mountpoint, placement)
    }
}

impl<N: Namespace + ?Sized> Namespace for Box<N> {
    fn bind(&mut self, new: &str, old: &str, placement: Placement) -> NamespaceResult<()> {
        (**self).bind(new, old, placement)
    }

    fn mount(
        &mut self,
        server: &str,
        old: &str,
        spec: Option<&str>,
        placement: Placement,
    ) -> NamespaceResult<()> {
        (**self).mount(server, old, spec, placement)
    }

    fn unmount(&mut self, new: Option<&str>, old: &str) -> NamespaceResult<()> {
        (**self).unmount(new, old)
    }

    fn clear(&mut self) -> NamespaceResult<()> {
        (**self).clear()
    }

    fn chdir(&mut self, dir: &str) -> NamespaceResult<()> {
        (**self).chdir(dir)
    }

    fn import(
        &mut self,
        host: &str,
        remote_path: Option<&str>,
        mountpoint: &str,
        placement: Placement,
    ) -> NamespaceResult<()> {
        (**self).import(host, remote_path, mountpoint, placement)
    }
}
