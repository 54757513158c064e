//! Filesystem failures raised while renaming.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A filesystem primitive that failed.
///
/// Every variant is recoverable: the session reports it on the error stream,
/// counts the affected path as skipped, and moves on to the next item.
#[derive(Debug, Error)]
pub enum FsError {
    /// Enumerating a directory failed.
    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDirectory {
        /// Directory that could not be enumerated.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Renaming an entry failed.
    #[error("failed to rename '{}' to '{}': {source}", from.display(), to.display())]
    Rename {
        /// Entry being renamed.
        from: PathBuf,
        /// Requested new path.
        to: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Removing an existing target failed.
    #[error("failed to remove '{}': {source}", path.display())]
    Remove {
        /// Entry that could not be removed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Creating missing parent directories failed.
    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDirectories {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Returns the path the failing primitive was applied to.
    ///
    /// For renames this is the source path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadDirectory { path, .. }
            | Self::Remove { path, .. }
            | Self::CreateDirectories { path, .. } => path,
            Self::Rename { from, .. } => from,
        }
    }

    /// Returns the kind of the underlying I/O failure.
    #[must_use]
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::ReadDirectory { source, .. }
            | Self::Rename { source, .. }
            | Self::Remove { source, .. }
            | Self::CreateDirectories { source, .. } => source.kind(),
        }
    }
}
