use std::path::{Path, PathBuf};

use crate::error::FsError;
use crate::planner::RenameDecision;

/// What happened to one work item.
#[derive(Debug)]
pub enum RenameOutcome {
    /// The entry was renamed.
    Renamed,
    /// The entry would have been renamed; `--no-op` was in effect.
    WouldRename,
    /// The name was already ASCII-safe.
    Unchanged,
    /// The planner refused the rename.
    Skipped,
    /// The directory was expanded and will be revisited after its children.
    Deferred,
    /// A filesystem primitive failed.
    Failed(FsError),
}

/// Record of the decision and outcome for one path.
#[derive(Debug)]
pub struct RenameRecord {
    source: PathBuf,
    decision: RenameDecision,
    outcome: RenameOutcome,
}

impl RenameRecord {
    pub(crate) const fn new(
        source: PathBuf,
        decision: RenameDecision,
        outcome: RenameOutcome,
    ) -> Self {
        Self {
            source,
            decision,
            outcome,
        }
    }

    /// Path the item had when it was processed.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Target path, when the planner chose to rename.
    #[must_use]
    pub fn target(&self) -> Option<&Path> {
        match &self.decision {
            RenameDecision::Rename { target, .. } => Some(target),
            _ => None,
        }
    }

    /// The planner's decision.
    #[must_use]
    pub const fn decision(&self) -> &RenameDecision {
        &self.decision
    }

    /// What the executor did with the decision.
    #[must_use]
    pub const fn outcome(&self) -> &RenameOutcome {
        &self.outcome
    }

    /// Reports whether this record is the final one for its path.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self.outcome, RenameOutcome::Deferred)
    }
}

/// Observer invoked for each [`RenameRecord`] produced during a run.
pub trait RenameRecordHandler {
    /// Handles a newly produced record.
    fn handle(&mut self, record: RenameRecord);
}

impl<F> RenameRecordHandler for F
where
    F: FnMut(RenameRecord),
{
    fn handle(&mut self, record: RenameRecord) {
        self(record);
    }
}
