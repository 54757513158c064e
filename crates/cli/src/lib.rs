#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of ascii-rename. It parses
//! the flags, prints help and version text, and hands the path operands to
//! [`engine::RenameSession`].
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error so the whole program can be driven from tests.
//! A [`clap`](https://docs.rs/clap/) command definition recognises the
//! supported switches; help and version handling are done here so their
//! output stays byte-for-byte stable. Combined short flags (`-rv`) and the
//! `--` separator are accepted.
//!
//! # Invariants
//!
//! - `run` never panics; output failures are ignored and do not change the
//!   exit status.
//! - Unknown options are rejected before any path is touched.
//!
//! # Errors
//!
//! Argument errors produce a single `ERROR:` line on standard error and the
//! status [`ARGUMENT_ERROR_EXIT_CODE`]. Otherwise the status is the number of
//! paths that could not be renamed.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = run(["ascii-rename", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert!(stdout.starts_with(b"ascii-rename "));
//! assert!(stderr.is_empty());
//! ```

mod arguments;
mod help;


use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use engine::{Diagnostics, RenameSession};
use logging::{Message, MessageSink};

pub use help::{HELP_TEXT, NO_ARGUMENTS_HINT, PROGRAM_NAME, version_text};

use arguments::{describe_error, parse_args};

/// Status returned by [`run`] when the command line cannot be parsed.
pub const ARGUMENT_ERROR_EXIT_CODE: i32 = -1;

/// Largest status [`exit_code_from`] reports for skipped paths. The next
/// value is reserved for argument errors.
const MAX_SKIPPED_EXIT_CODE: i32 = 254;

/// Parsing entry points exposed for integration tests.
#[doc(hidden)]
pub mod test_utils {
    pub use crate::arguments::{ParsedArgs, parse_args};
}

/// Runs ascii-rename with the given arguments and output handles.
///
/// The first argument is the program name. Returns `0` when every path was
/// renamed or needed no rename, the number of skipped paths otherwise, and
/// [`ARGUMENT_ERROR_EXIT_CODE`] when parsing fails.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => {
            let message = Message::error(describe_error(&error));
            let mut sink = MessageSink::new(stderr);
            if sink.write(&message).is_err() {
                let _ = writeln!(sink.get_mut(), "{message}");
            }
            return ARGUMENT_ERROR_EXIT_CODE;
        }
    };

    if parsed.show_help {
        let _ = stdout.write_all(HELP_TEXT.as_bytes());
        return 0;
    }
    if parsed.show_version {
        let _ = stdout.write_all(version_text().as_bytes());
        return 0;
    }
    if parsed.no_arguments {
        let _ = stdout.write_all(NO_ARGUMENTS_HINT.as_bytes());
        return 0;
    }

    let options = parsed.rename_options();
    logging::init_tracing(&options.verbosity());

    let mut diagnostics = Diagnostics::new(&mut *stdout, &mut *stderr, options.verbosity());
    let summary = RenameSession::new(options).run(&parsed.paths, &mut diagnostics);
    summary.exit_code()
}

/// Converts a [`run`] status into a process exit code.
///
/// Negative statuses become `255`. Skip counts are clamped to `0..=254` so a
/// large number of skipped paths can never look like a successful run or an
/// argument error.
#[must_use]
pub fn exit_code_from(status: i32) -> ExitCode {
    if status < 0 {
        return ExitCode::from(u8::MAX);
    }
    let clamped = status.min(MAX_SKIPPED_EXIT_CODE);
    ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX - 1))
}
