//! Per-action operation handlers.
//!
//! Each handler checks the operand count for its action, destructures the
//! operands positionally and makes exactly one capability call.

mod bind;
mod import;
mod mount;
mod unmount;

use nsfile_core::{Namespace, Operation};

use crate::error::{BuildError, BuildResult};

pub use bind::execute_bind;
pub use import::execute_import;
pub use mount::execute_mount;
pub use unmount::execute_unmount;

/// Fail unless `op` has between `min` and `max` operands.
pub(crate) fn check_arity(
    op: &Operation,
    index: usize,
    min: usize,
    max: usize,
    expected: &'static str,
) -> BuildResult<()> {
    let found = op.operands.len();
    if found < min || found > max {
        return Err(BuildError::arity(index, op, expected));
    }
    Ok(())
}

/// `clear` takes no operands.
pub fn execute_clear<N: Namespace + ?Sized>(
    ns: &mut N,
    op: &Operation,
    index: usize,
) -> BuildResult<()> {
    check_arity(op, index, 0, 0, "0")?;
    ns.clear().map_err(|e| BuildError::apply(index, op, e))
}

/// `cd dir`
pub fn execute_chdir<N: Namespace + ?Sized>(
    ns: &mut N,
    op: &Operation,
    index: usize,
) -> BuildResult<()> {
    check_arity(op, index, 1, 1, "1")?;
    ns.chdir(&op.operands[0])
        .map_err(|e| BuildError::apply(index, op, e))
}
