use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

/// Error returned when a [`WorkItem`](crate::WorkItem) is handed back to the
/// queue in a way that would break the traversal invariants.
#[derive(Debug, Eq, PartialEq)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn already_expanded(path: PathBuf) -> Self {
        Self::new(WalkErrorKind::AlreadyExpanded { path })
    }

    pub(crate) fn foreign_item(path: PathBuf) -> Self {
        Self::new(WalkErrorKind::ForeignItem { path })
    }

    /// Returns the specific failure.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the path of the item involved in the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::AlreadyExpanded { path } => {
                write!(f, "directory '{}' was already expanded", path.display())
            }
            WalkErrorKind::ForeignItem { path } => {
                write!(
                    f,
                    "work item '{}' does not belong to this queue",
                    path.display()
                )
            }
        }
    }
}

impl Error for WalkError {}

/// Classification of work-queue failures.
#[derive(Debug, Eq, PartialEq)]
pub enum WalkErrorKind {
    /// A directory item that had already been expanded was expanded again.
    /// The item is put back at the front of the queue untouched.
    AlreadyExpanded {
        /// Directory that was expanded twice.
        path: PathBuf,
    },
    /// The item was popped from a different queue.
    ForeignItem {
        /// Path carried by the foreign item.
        path: PathBuf,
    },
}

impl WalkErrorKind {
    /// Returns the path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::AlreadyExpanded { path } | Self::ForeignItem { path } => path,
        }
    }
}
