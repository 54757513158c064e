//! crates/logging/src/verbosity.rs
//! Verbosity configuration derived from the number of `-v` flags.

/// Informational output categories gated by the verbose level.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InfoFlag {
    /// `Processing "…"` and queueing progress for every entry.
    Name,
    /// Explanations for skipped and unchanged entries.
    Skip,
    /// Final `Renamed/Skipped/Total` summary line.
    Stats,
}

/// Combined verbosity configuration.
///
/// Level `0` prints only renames and errors. Level `1` (`-v`) adds per-entry
/// progress, skip explanations, and the final summary. Level `2` and above
/// additionally lowers the default structured tracing filter to `debug`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Level for per-entry progress messages.
    pub name: u8,
    /// Level for skip explanations.
    pub skip: u8,
    /// Level for the run summary.
    pub stats: u8,
    /// Level for structured debug traces.
    pub debug: u8,
}

impl VerbosityConfig {
    /// Creates a configuration from the number of `-v` flags.
    #[must_use]
    pub fn from_verbose_level(level: u8) -> Self {
        match level {
            0 => Self::default(),
            1 => Self {
                name: 1,
                skip: 1,
                stats: 1,
                debug: 0,
            },
            _ => Self {
                name: 2,
                skip: 2,
                stats: 1,
                debug: level - 1,
            },
        }
    }

    /// Reports whether the given info flag is enabled at `level` or above.
    #[must_use]
    pub const fn info_gte(&self, flag: InfoFlag, level: u8) -> bool {
        let current = match flag {
            InfoFlag::Name => self.name,
            InfoFlag::Skip => self.skip,
            InfoFlag::Stats => self.stats,
        };
        current >= level
    }

    /// Reports whether any `-v` flag was supplied.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.name > 0 || self.skip > 0 || self.stats > 0
    }

    /// Default tracing directive used when no environment filter is set.
    #[must_use]
    pub const fn default_directive(&self) -> &'static str {
        match self.debug {
            0 => "off",
            1 => "ascii_rename=debug",
            _ => "ascii_rename=trace",
        }
    }
}
