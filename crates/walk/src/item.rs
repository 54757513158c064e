use std::path::Path;
use std::path::PathBuf;

/// A path handed out by [`WorkQueue::pop`](crate::WorkQueue::pop).
///
/// Items are not [`Clone`]: each one must be returned to the queue that
/// produced it through exactly one of
/// [`WorkQueue::expand`](crate::WorkQueue::expand) or
/// [`WorkQueue::complete`](crate::WorkQueue::complete).
#[derive(Debug, Eq, PartialEq)]
#[must_use = "work items must be expanded or completed"]
pub struct WorkItem {
    pub(crate) queue: u64,
    pub(crate) slot: usize,
    pub(crate) path: PathBuf,
    pub(crate) depth: usize,
    pub(crate) expanded: bool,
}

impl WorkItem {
    /// Returns the path to process.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of expansions between this item and the root operand it came
    /// from. Root operands have depth `0`.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Reports whether this item is a directory whose children have all been
    /// completed. Expanded items must not be expanded again.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Reports whether this item came straight from the operand list.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.depth == 0
    }
}
