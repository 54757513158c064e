//! Run configuration for a rename session.
//!
//! [`RenameOptions`] is assembled by the command-line front-end through
//! [`RenameOptionsBuilder`]:
//!
//! ```rust
//! use engine::{ExecutionMode, RenameOptions};
//!
//! let options = RenameOptions::builder()
//!     .recursive(true)
//!     .no_op(true)
//!     .verbose_level(1)
//!     .build();
//! assert_eq!(options.execution(), ExecutionMode::NoOp);
//! assert!(options.recursive());
//! ```

use logging::VerbosityConfig;

/// Whether the session mutates the filesystem.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExecutionMode {
    /// Perform the renames.
    #[default]
    Apply,
    /// Report what would be renamed without touching the filesystem.
    NoOp,
}

impl ExecutionMode {
    /// Reports whether this mode leaves the filesystem untouched.
    #[must_use]
    pub const fn is_no_op(self) -> bool {
        matches!(self, Self::NoOp)
    }
}

/// Flags controlling planning and execution.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RenameOptions {
    execution: ExecutionMode,
    overwrite: bool,
    recursive: bool,
    parents: bool,
    verbosity: VerbosityConfig,
}

impl RenameOptions {
    /// Starts a builder with every flag off.
    #[must_use]
    pub fn builder() -> RenameOptionsBuilder {
        RenameOptionsBuilder::default()
    }

    /// Returns the execution mode.
    #[must_use]
    pub const fn execution(&self) -> ExecutionMode {
        self.execution
    }

    /// Reports whether `--no-op` was requested.
    #[must_use]
    pub const fn no_op(&self) -> bool {
        self.execution.is_no_op()
    }

    /// Reports whether existing targets may be replaced.
    #[must_use]
    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Reports whether directory contents are renamed before the directory.
    #[must_use]
    pub const fn recursive(&self) -> bool {
        self.recursive
    }

    /// Reports whether missing target parents are created.
    #[must_use]
    pub const fn parents(&self) -> bool {
        self.parents
    }

    /// Returns the output verbosity.
    #[must_use]
    pub const fn verbosity(&self) -> VerbosityConfig {
        self.verbosity
    }
}

/// Fluent builder for [`RenameOptions`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RenameOptionsBuilder {
    options: RenameOptions,
}

impl RenameOptionsBuilder {
    /// Selects [`ExecutionMode::NoOp`] when `enabled`.
    #[must_use]
    pub const fn no_op(mut self, enabled: bool) -> Self {
        self.options.execution = if enabled {
            ExecutionMode::NoOp
        } else {
            ExecutionMode::Apply
        };
        self
    }

    /// Allows replacing existing targets.
    #[must_use]
    pub const fn overwrite(mut self, enabled: bool) -> Self {
        self.options.overwrite = enabled;
        self
    }

    /// Renames directory contents before the directory.
    #[must_use]
    pub const fn recursive(mut self, enabled: bool) -> Self {
        self.options.recursive = enabled;
        self
    }

    /// Creates missing target parents before renaming.
    #[must_use]
    pub const fn parents(mut self, enabled: bool) -> Self {
        self.options.parents = enabled;
        self
    }

    /// Sets the verbosity directly.
    #[must_use]
    pub const fn verbosity(mut self, verbosity: VerbosityConfig) -> Self {
        self.options.verbosity = verbosity;
        self
    }

    /// Sets the verbosity from the number of `-v` flags.
    #[must_use]
    pub fn verbose_level(self, level: u8) -> Self {
        self.verbosity(VerbosityConfig::from_verbose_level(level))
    }

    /// Finishes the builder.
    #[must_use]
    pub const fn build(self) -> RenameOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let options = RenameOptions::default();
        assert_eq!(options.execution(), ExecutionMode::Apply);
        assert!(!options.no_op());
        assert!(!options.overwrite());
        assert!(!options.recursive());
        assert!(!options.parents());
        assert!(!options.verbosity().is_verbose());
    }

    #[test]
    fn builder_sets_each_flag() {
        let options = RenameOptions::builder()
            .no_op(true)
            .overwrite(true)
            .recursive(true)
            .parents(true)
            .verbose_level(1)
            .build();

        assert!(options.no_op());
        assert!(options.overwrite());
        assert!(options.recursive());
        assert!(options.parents());
        assert!(options.verbosity().is_verbose());
    }

    #[test]
    fn no_op_can_be_switched_back_off() {
        let options = RenameOptions::builder().no_op(true).no_op(false).build();
        assert_eq!(options.execution(), ExecutionMode::Apply);
    }
}
