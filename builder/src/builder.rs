//! Namespace builder - replays a script against a capability.
//!
//! The builder delegates to the handlers in `ops/`:
//! - `ops/bind.rs` - `bind` (splice)
//! - `ops/mount.rs` - `mount`
//! - `ops/unmount.rs` - `unmount`
//! - `ops/import.rs` - `import`
//! - `ops/mod.rs` - `clear` and `cd`
//!
//! Includes are resolved through the configured `ScriptLoader`.

use nsfile_core::{Action, Namespace, Operation, Script};

use crate::error::{BuildError, BuildResult, IncludeError};
use crate::include::ScriptLoader;
use crate::ops;
use crate::result::BuildSummary;

/// Sequential, fail-fast script interpreter.
///
/// Operations are applied in order, each at most once. The first failure
/// stops the build; operations already applied stay in effect.
pub struct Builder<'a, N: Namespace + ?Sized> {
    ns: &'a mut N,
    loader: Option<&'a mut dyn ScriptLoader>,
}

impl<'a, N: Namespace + ?Sized> Builder<'a, N> {
    /// Create a builder over a namespace capability.
    pub fn new(ns: &'a mut N) -> Self {
        Self { ns, loader: None }
    }

    /// Resolve `.` includes through `loader`.
    pub fn with_loader(mut self, loader: &'a mut dyn ScriptLoader) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Apply `script` to the name space as it currently stands.
    #[tracing::instrument(level = "info", skip_all, fields(operations = script.len()))]
    pub fn build(&mut self, script: &Script) -> BuildResult<BuildSummary> {
        let mut summary = BuildSummary::default();
        self.apply_all(script, &mut summary)?;
        Ok(summary)
    }

    /// Clear the name space, then apply `script`.
    #[tracing::instrument(level = "info", skip_all, fields(operations = script.len()))]
    pub fn build_from_scratch(&mut self, script: &Script) -> BuildResult<BuildSummary> {
        self.ns.clear().map_err(|source| {
            tracing::warn!(error = %source, "clearing the name space failed");
            BuildError::Reset { source }
        })?;
        let mut summary = BuildSummary {
            reset: true,
            ..BuildSummary::default()
        };
        self.apply_all(script, &mut summary)?;
        Ok(summary)
    }

    fn apply_all(&mut self, script: &Script, summary: &mut BuildSummary) -> BuildResult<()> {
        for (index, op) in script.iter().enumerate() {
            if let Err(e) = self.apply(index, op, summary) {
                tracing::warn!(
                    index,
                    line = op.line,
                    action = %op.action,
                    error = %e,
                    "build stopped"
                );
                return Err(e);
            }
        }
        Ok(())
    }

    /// Apply a single operation.
    fn apply(
        &mut self,
        index: usize,
        op: &Operation,
        summary: &mut BuildSummary,
    ) -> BuildResult<()> {
        tracing::debug!(index, line = op.line, op = %op, "applying operation");
        match op.action {
            Action::Splice => ops::execute_bind(&mut *self.ns, op, index)?,
            Action::Mount => ops::execute_mount(&mut *self.ns, op, index)?,
            Action::Unmount => ops::execute_unmount(&mut *self.ns, op, index)?,
            Action::Reset => ops::execute_clear(&mut *self.ns, op, index)?,
            Action::ChangeDir => ops::execute_chdir(&mut *self.ns, op, index)?,
            Action::Import => ops::execute_import(&mut *self.ns, op, index)?,
            Action::Include => self.include(index, op, summary)?,
        }
        summary.applied += 1;
        Ok(())
    }

    /// Apply an included script in place of the `.` operation.
    fn include(
        &mut self,
        index: usize,
        op: &Operation,
        summary: &mut BuildSummary,
    ) -> BuildResult<()> {
        ops::check_arity(op, index, 1, 1, "1")?;
        let path = op.operands[0].as_str();

        let nested = match self.loader.as_deref_mut() {
            Some(loader) => loader
                .enter(path)
                .map_err(|e| BuildError::include(index, op, path, e))?,
            None => {
                return Err(BuildError::include(
                    index,
                    op,
                    path,
                    IncludeError::Unsupported,
                ))
            }
        };

        let result = self.apply_all(&nested, summary);
        if let Some(loader) = self.loader.as_deref_mut() {
            loader.leave(path);
        }
        result.map_err(|e| BuildError::nested(index, op, path, e))?;

        summary.included += 1;
        Ok(())
    }
}
