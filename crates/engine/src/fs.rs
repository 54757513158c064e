//! Filesystem primitives used by the planner and executor.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FsError;

/// Filesystem operations required to plan and perform renames.
///
/// Queries never follow symbolic links: a dangling link exists, and a link to
/// a directory is not itself a directory.
pub trait FilesystemProvider {
    /// Reports whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reports whether `path` is a directory.
    fn is_directory(&self, path: &Path) -> bool;

    /// Lists the full paths of the entries inside `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::ReadDirectory`] when the directory cannot be read.
    fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>, FsError>;

    /// Renames `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::Rename`] when the operating system refuses.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError>;

    /// Removes the entry at `path`, including directory contents.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::Remove`] when the entry cannot be removed.
    fn remove(&self, path: &Path) -> Result<(), FsError>;

    /// Creates `path` and any missing ancestors.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::CreateDirectories`] when creation fails.
    fn create_directories(&self, path: &Path) -> Result<(), FsError>;
}

impl<T: FilesystemProvider + ?Sized> FilesystemProvider for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        (**self).is_directory(path)
    }

    fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        (**self).list_children(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        (**self).rename(from, to)
    }

    fn remove(&self, path: &Path) -> Result<(), FsError> {
        (**self).remove(path)
    }

    fn create_directories(&self, path: &Path) -> Result<(), FsError> {
        (**self).create_directories(path)
    }
}

/// The local filesystem through `std::fs`.
///
/// Children are returned sorted by file name so runs are reproducible across
/// platforms.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LocalFilesystem;

impl FilesystemProvider for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_directory(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok_and(|metadata| metadata.is_dir())
    }

    fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        let read_error = |source| FsError::ReadDirectory {
            path: path.to_path_buf(),
            source,
        };

        let mut children = Vec::new();
        for entry in fs::read_dir(path).map_err(read_error)? {
            children.push(entry.map_err(read_error)?.path());
        }
        children.sort_by(|left, right| left.file_name().cmp(&right.file_name()));
        Ok(children)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        fs::rename(from, to).map_err(|source| FsError::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    }

    fn remove(&self, path: &Path) -> Result<(), FsError> {
        let result = if self.is_directory(path) {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|source| FsError::Remove {
            path: path.to_path_buf(),
            source,
        })
    }

    fn create_directories(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir_all(path).map_err(|source| FsError::CreateDirectories {
            path: path.to_path_buf(),
            source,
        })
    }
}
