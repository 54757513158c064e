#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the diagnostics layer shared across the ascii-rename
//! workspace: user-facing [`Message`] lines, [`MessageSink`] writers that
//! stream them to stdout or stderr, the [`VerbosityConfig`] derived from the
//! number of `-v` flags, and structured tracing setup for debugging the tool
//! itself.
//!
//! # Design
//!
//! - Renames and verbose progress are [`Severity::Info`] messages and go to
//!   standard output. Errors go to the error stream.
//! - [`VerbosityConfig`] gates per-entry progress ([`InfoFlag::Name`]), skip
//!   explanations ([`InfoFlag::Skip`]), and the final summary
//!   ([`InfoFlag::Stats`]).
//! - The `trace_*!` macros emit `tracing` events under `ascii_rename::*`
//!   targets. [`init_tracing`] installs a stderr subscriber whose filter comes
//!   from `ASCII_RENAME_LOG` or the verbosity level.
//!
//! # Examples
//!
//! ```
//! use logging::{InfoFlag, Message, MessageSink, VerbosityConfig};
//!
//! let verbosity = VerbosityConfig::from_verbose_level(1);
//! let mut stdout = MessageSink::new(Vec::new());
//! if verbosity.info_gte(InfoFlag::Stats, 1) {
//!     stdout.write(&Message::info("Renamed: 2, Skipped: 0, Total: 2")).unwrap();
//! }
//! assert_eq!(stdout.into_inner(), b"Renamed: 2, Skipped: 0, Total: 2\n");
//! ```

mod message;
mod sink;
mod tracing_macros;
mod tracing_setup;
mod verbosity;

pub use message::{Message, Severity};
pub use sink::MessageSink;
pub use tracing_setup::{LOG_ENV_VAR, init_tracing};
pub use verbosity::{InfoFlag, VerbosityConfig};
