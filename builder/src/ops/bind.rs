//! `bind [-abcC] new old`

use nsfile_core::{Namespace, Operation};

use crate::error::{BuildError, BuildResult};
use crate::ops::check_arity;

/// Execute a splice: `operands[0]` is new, `operands[1]` is old.
pub fn execute_bind<N: Namespace + ?Sized>(
    ns: &mut N,
    op: &Operation,
    index: usize,
) -> BuildResult<()> {
    check_arity(op, index, 2, 2, "2")?;
    let (new, old) = (&op.operands[0], &op.operands[1]);
    ns.bind(new, old, op.placement)
        .map_err(|e| BuildError::apply(index, op, e))
}
