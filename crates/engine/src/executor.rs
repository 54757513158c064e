//! Acting on planner decisions.

use std::io::Write;
use std::path::{Path, PathBuf};

use logging::{InfoFlag, trace_exec};

use crate::counters::RunCounters;
use crate::error::FsError;
use crate::fs::FilesystemProvider;
use crate::options::ExecutionMode;
use crate::planner::RenameDecision;
use crate::record::{RenameOutcome, RenameRecord};
use crate::report::{Diagnostics, quoted};

/// Carries out [`RenameDecision`]s, reporting each one and updating the run
/// counters.
///
/// Under [`ExecutionMode::NoOp`] no mutating filesystem call is ever made.
/// Skips never touch the filesystem in either mode.
pub struct RenameExecutor<'a, F: ?Sized> {
    fs: &'a F,
    mode: ExecutionMode,
}

impl<'a, F> RenameExecutor<'a, F>
where
    F: FilesystemProvider + ?Sized,
{
    /// Creates an executor over `fs`.
    #[must_use]
    pub const fn new(fs: &'a F, mode: ExecutionMode) -> Self {
        Self { fs, mode }
    }

    /// Executes `decision` for `source`.
    pub fn execute<Out, Err>(
        &self,
        source: PathBuf,
        decision: RenameDecision,
        diagnostics: &mut Diagnostics<Out, Err>,
        counters: &mut RunCounters,
    ) -> RenameRecord
    where
        Out: Write,
        Err: Write,
    {
        let outcome = match &decision {
            RenameDecision::Rename {
                target,
                create_parent,
            } => self.rename(&source, target, *create_parent, diagnostics, counters),
            RenameDecision::SkipUnchanged => {
                diagnostics.verbose(
                    InfoFlag::Skip,
                    format!("No need to rename {}.", quoted(&source)),
                );
                counters.record_unchanged();
                RenameOutcome::Unchanged
            }
            RenameDecision::Defer => RenameOutcome::Deferred,
            skip => {
                report_skip(&source, skip, diagnostics);
                diagnostics.verbose(InfoFlag::Skip, format!("Skipping {}...", quoted(&source)));
                counters.record_skipped();
                RenameOutcome::Skipped
            }
        };
        RenameRecord::new(source, decision, outcome)
    }

    fn rename<Out, Err>(
        &self,
        source: &Path,
        target: &Path,
        create_parent: bool,
        diagnostics: &mut Diagnostics<Out, Err>,
        counters: &mut RunCounters,
    ) -> RenameOutcome
    where
        Out: Write,
        Err: Write,
    {
        if self.mode.is_no_op() {
            diagnostics.info(format!(
                "Would have renamed {} to {}...",
                quoted(source),
                quoted(target)
            ));
            counters.record_renamed();
            return RenameOutcome::WouldRename;
        }

        diagnostics.info(format!(
            "Renaming {} to {}...",
            quoted(source),
            quoted(target)
        ));
        match self.apply(source, target, create_parent) {
            Ok(()) => {
                counters.record_renamed();
                RenameOutcome::Renamed
            }
            Err(error) => {
                diagnostics.error(error.to_string());
                diagnostics.verbose(InfoFlag::Skip, format!("Skipping {}...", quoted(source)));
                counters.record_skipped();
                RenameOutcome::Failed(error)
            }
        }
    }

    fn apply(&self, source: &Path, target: &Path, create_parent: bool) -> Result<(), FsError> {
        if create_parent
            && let Some(parent) = target.parent()
        {
            trace_exec!("creating {:?}", parent);
            self.fs.create_directories(parent)?;
        }
        // Only reachable with --overwrite; the planner skips conflicts otherwise.
        if self.fs.exists(target) {
            trace_exec!("removing existing {:?}", target);
            self.fs.remove(target)?;
        }
        self.fs.rename(source, target)?;
        trace_exec!("renamed {:?} to {:?}", source, target);
        Ok(())
    }
}

fn report_skip<Out, Err>(source: &Path, decision: &RenameDecision, diagnostics: &mut Diagnostics<Out, Err>)
where
    Out: Write,
    Err: Write,
{
    match decision {
        RenameDecision::SkipMissing => {
            diagnostics.error(format!("{} doesn't exist.", quoted(source)));
        }
        RenameDecision::SkipConflict { target } => {
            diagnostics.error(format!("{} already exists.", quoted(target)));
            diagnostics.error("Specify --overwrite to overwrite.");
        }
        RenameDecision::SkipMissingParent { parent } => {
            diagnostics.error(format!("{} doesn't exist.", quoted(parent)));
            diagnostics.error("Specify --parents to create it.");
        }
        RenameDecision::SkipInvalidName { error } => {
            diagnostics.error(format!("Cannot rename {}: {error}.", quoted(source)));
        }
        RenameDecision::Rename { .. } | RenameDecision::SkipUnchanged | RenameDecision::Defer => {}
    }
}
