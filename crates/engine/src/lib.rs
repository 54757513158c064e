#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` turns a list of path operands into renames that replace
//! non-ASCII characters in entry names. It combines the name transliteration
//! from the `transliterate` crate with the children-first ordering of the
//! `walk` crate and applies the result to the filesystem.
//!
//! # Design
//!
//! - [`RenameSession`] owns the run: it seeds a [`walk::WorkQueue`] with the
//!   normalised operands, expands directories when recursion is enabled, and
//!   sends every other item through planning and execution.
//! - [`decide`] and [`RenamePlanner`] choose a [`RenameDecision`] per path.
//!   They query the filesystem but never change it.
//! - [`RenameExecutor`] acts on the decision, writes user-facing lines through
//!   [`Diagnostics`], and updates [`RunCounters`].
//! - [`FilesystemProvider`] abstracts the primitives so tests can count
//!   mutating calls or reorder directory listings. [`LocalFilesystem`] is the
//!   `std::fs` implementation.
//!
//! # Invariants
//!
//! - Each path reaches exactly one terminal [`RenameRecord`].
//! - A directory is renamed only after every entry inside it was processed.
//! - Under `--no-op` no mutating filesystem call is made.
//! - Counters never decrease, and only failures count toward the exit status.
//!
//! # Errors
//!
//! Filesystem failures surface as [`FsError`] inside
//! [`RenameOutcome::Failed`]. They are reported on the error stream and the
//! run continues with the next item.
//!
//! # Examples
//!
//! ```
//! use engine::{Diagnostics, RenameOptions, RenameSession};
//!
//! let temp = tempfile::tempdir()?;
//! std::fs::create_dir(temp.path().join("Déjà"))?;
//! std::fs::write(temp.path().join("Déjà").join("ça.txt"), b"")?;
//!
//! let options = RenameOptions::builder().recursive(true).build();
//! let mut diagnostics = Diagnostics::new(Vec::new(), Vec::new(), options.verbosity());
//! let summary = RenameSession::new(options).run([temp.path().join("Déjà")], &mut diagnostics);
//!
//! assert_eq!(summary.counters().renamed(), 2);
//! assert!(temp.path().join("Deja").join("ca.txt").exists());
//! # Ok::<(), std::io::Error>(())
//! ```

mod counters;
mod error;
mod executor;
mod fs;
mod operands;
mod options;
mod planner;
mod record;
mod report;
mod session;

#[cfg(test)]
mod tests;

pub use counters::RunCounters;
pub use error::FsError;
pub use executor::RenameExecutor;
pub use fs::{FilesystemProvider, LocalFilesystem};
pub use operands::normalize_operand;
pub use options::{ExecutionMode, RenameOptions, RenameOptionsBuilder};
pub use planner::{RenameDecision, RenamePlanner, decide};
pub use record::{RenameOutcome, RenameRecord, RenameRecordHandler};
pub use report::Diagnostics;
pub use session::{RenameSession, RunSummary};
