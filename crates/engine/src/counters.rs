//! Per-run tallies.

use std::fmt;

/// Counters accumulated over one run.
///
/// Counters only ever increase. `skipped` drives the process exit status;
/// `unchanged` is informational.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunCounters {
    renamed: u64,
    skipped: u64,
    unchanged: u64,
}

impl RunCounters {
    /// Creates zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            renamed: 0,
            skipped: 0,
            unchanged: 0,
        }
    }

    pub(crate) const fn record_renamed(&mut self) {
        self.renamed += 1;
    }

    pub(crate) const fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub(crate) const fn record_unchanged(&mut self) {
        self.unchanged += 1;
    }

    /// Entries renamed, or that would have been under `--no-op`.
    #[must_use]
    pub const fn renamed(&self) -> u64 {
        self.renamed
    }

    /// Entries that could not be renamed.
    #[must_use]
    pub const fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Entries whose names were already ASCII-safe.
    #[must_use]
    pub const fn unchanged(&self) -> u64 {
        self.unchanged
    }

    /// Renamed plus skipped entries.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.renamed + self.skipped
    }

    /// Process status for this run: the number of skipped entries, saturating
    /// at `i32::MAX`.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.skipped).unwrap_or(i32::MAX)
    }
}

impl fmt::Display for RunCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Renamed: {}, Skipped: {}, Total: {}",
            self.renamed,
            self.skipped,
            self.total()
        )
    }
}
