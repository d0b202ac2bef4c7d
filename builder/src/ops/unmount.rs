//! `unmount [new] old`

use nsfile_core::{Namespace, Operation};

use crate::error::{BuildError, BuildResult};

/// Execute an unmount.
///
/// With a single operand it names `old` and everything mounted there goes.
pub fn execute_unmount<N: Namespace + ?Sized>(
    ns: &mut N,
    op: &Operation,
    index: usize,
) -> BuildResult<()> {
    let (new, old) = match op.operands.as_slice() {
        [old] => (None, old),
        [new, old] => (Some(new.as_str()), old),
        _ => return Err(BuildError::arity(index, op, "1 or 2")),
    };
    ns.unmount(new, old)
        .map_err(|e| BuildError::apply(index, op, e))
}
