//! `mount [-abcC] servername old [spec]`

use nsfile_core::{Namespace, Operation};

use crate::error::{BuildError, BuildResult};
use crate::ops::check_arity;

/// Execute a mount. The spec operand is optional.
pub fn execute_mount<N: Namespace + ?Sized>(
    ns: &mut N,
    op: &Operation,
    index: usize,
) -> BuildResult<()> {
    check_arity(op, index, 2, 3, "2 or 3")?;
    let server = &op.operands[0];
    let old = &op.operands[1];
    let spec = op.operand(2);
    ns.mount(server, old, spec, op.placement)
        .map_err(|e| BuildError::apply(index, op, e))
}
