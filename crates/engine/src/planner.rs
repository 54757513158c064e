//! Per-path rename decisions.
//!
//! The planner is the only place where rename policy lives. It queries the
//! filesystem but never mutates it, so a decision can be computed and shown
//! under `--no-op` exactly as it would be acted on.

use std::path::{Path, PathBuf};

use logging::trace_plan;
use transliterate::{
    AnyAscii, EncodingError, NameTransliterator, NativeCodec, TargetName, TextCodec,
    Transliterator,
};

use crate::fs::FilesystemProvider;
use crate::options::RenameOptions;

/// Outcome chosen for one work item.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RenameDecision {
    /// Rename the entry to `target`.
    Rename {
        /// New path for the entry.
        target: PathBuf,
        /// The target's parent is missing and must be created first.
        create_parent: bool,
    },
    /// The name is already ASCII-safe.
    SkipUnchanged,
    /// The source path does not exist.
    SkipMissing,
    /// Something already exists at `target` and overwriting is off.
    SkipConflict {
        /// Path that is already taken.
        target: PathBuf,
    },
    /// The target's parent directory does not exist and `--parents` is off.
    SkipMissingParent {
        /// Directory that would have to be created.
        parent: PathBuf,
    },
    /// The transliterated name cannot name a sibling entry.
    SkipInvalidName {
        /// Why the name was refused.
        error: EncodingError,
    },
    /// The directory was expanded; its own decision comes after its children.
    Defer,
}

impl RenameDecision {
    /// Reports whether the decision leads to a rename attempt.
    #[must_use]
    pub const fn is_rename(&self) -> bool {
        matches!(self, Self::Rename { .. })
    }

    /// Reports whether the decision counts toward the skipped total.
    ///
    /// Unchanged names and deferred directories are not failures.
    #[must_use]
    pub const fn counts_as_skipped(&self) -> bool {
        matches!(
            self,
            Self::SkipMissing
                | Self::SkipConflict { .. }
                | Self::SkipMissingParent { .. }
                | Self::SkipInvalidName { .. }
        )
    }
}

/// Decides what to do with a path given its precomputed target.
///
/// Checks run in a fixed order and the first match wins:
///
/// 1. the source is missing;
/// 2. the target name is invalid;
/// 3. the target equals the source;
/// 4. the target exists and `--overwrite` is off;
/// 5. the target's parent is missing, which `--parents` turns into a rename
///    that creates it;
/// 6. otherwise the entry is renamed.
///
/// Directory expansion is handled by the session before planning.
pub fn decide<F>(
    path: &Path,
    target: TargetName,
    options: &RenameOptions,
    fs: &F,
) -> RenameDecision
where
    F: FilesystemProvider + ?Sized,
{
    if !fs.exists(path) {
        return RenameDecision::SkipMissing;
    }

    let target = match target {
        TargetName::Invalid(error) => return RenameDecision::SkipInvalidName { error },
        TargetName::Unchanged => return RenameDecision::SkipUnchanged,
        TargetName::Changed(target) if target.as_path() == path => {
            return RenameDecision::SkipUnchanged;
        }
        TargetName::Changed(target) => target,
    };

    if fs.exists(&target) && !options.overwrite() {
        return RenameDecision::SkipConflict { target };
    }

    // A bare name has an empty parent, which is the current directory.
    let parent = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent
        && !fs.exists(parent)
    {
        if options.parents() {
            return RenameDecision::Rename {
                target,
                create_parent: true,
            };
        }
        return RenameDecision::SkipMissingParent {
            parent: parent.to_path_buf(),
        };
    }

    RenameDecision::Rename {
        target,
        create_parent: false,
    }
}

/// Computes targets and decisions for paths.
pub struct RenamePlanner<'a, F: ?Sized, T = AnyAscii, C = NativeCodec> {
    fs: &'a F,
    names: &'a NameTransliterator<T, C>,
    options: &'a RenameOptions,
}

impl<'a, F, T, C> RenamePlanner<'a, F, T, C>
where
    F: FilesystemProvider + ?Sized,
    T: Transliterator,
    C: TextCodec,
{
    /// Creates a planner over the given collaborators.
    #[must_use]
    pub const fn new(
        fs: &'a F,
        names: &'a NameTransliterator<T, C>,
        options: &'a RenameOptions,
    ) -> Self {
        Self { fs, names, options }
    }

    /// Plans the terminal decision for `path`.
    #[must_use]
    pub fn plan(&self, path: &Path) -> RenameDecision {
        let target = self.names.target_for(path);
        let decision = decide(path, target, self.options, self.fs);
        trace_plan!("{:?} -> {:?}", path, decision);
        decision
    }
}
