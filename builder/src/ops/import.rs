//! `import [-abcC] host [remotepath] mountpoint`

use nsfile_core::{Namespace, Operation};

use crate::error::{BuildError, BuildResult};

/// Execute an import. Without a remote path the host's whole tree is imported.
pub fn execute_import<N: Namespace + ?Sized>(
    ns: &mut N,
    op: &Operation,
    index: usize,
) -> BuildResult<()> {
    let (host, remote_path, mountpoint) = match op.operands.as_slice() {
        [host, mountpoint] => (host, None, mountpoint),
        [host, remote, mountpoint] => (host, Some(remote.as_str()), mountpoint),
        _ => return Err(BuildError::arity(index, op, "2 or 3")),
    };
    ns.import(host, remote_path, mountpoint, op.placement)
        .map_err(|e| BuildError::apply(index, op, e))
}
