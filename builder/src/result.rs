//! Build result types.

/// What a successful build did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Operations applied, counting those inside included scripts.
    pub applied: usize,
    /// Included scripts that were applied in full.
    pub included: usize,
    /// Whether the name space was cleared before the script ran.
    pub reset: bool,
}
