//! User-facing output for a rename run.

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use logging::{InfoFlag, Message, MessageSink, VerbosityConfig};

/// Routes run messages to standard output and standard error.
///
/// Informational lines go to `stdout` and errors to `stderr`. Lines gated on
/// an [`InfoFlag`] are dropped unless the verbosity enables them. Write
/// failures never stop a run; the first one is remembered and can be queried
/// with [`Diagnostics::write_failed`].
pub struct Diagnostics<Out: Write, Err: Write> {
    stdout: MessageSink<Out>,
    stderr: MessageSink<Err>,
    verbosity: VerbosityConfig,
    write_failed: bool,
}

impl<Out: Write, Err: Write> Diagnostics<Out, Err> {
    /// Wraps the output streams.
    pub fn new(stdout: Out, stderr: Err, verbosity: VerbosityConfig) -> Self {
        Self {
            stdout: MessageSink::new(stdout),
            stderr: MessageSink::new(stderr),
            verbosity,
            write_failed: false,
        }
    }

    /// Returns the verbosity in effect.
    #[must_use]
    pub const fn verbosity(&self) -> VerbosityConfig {
        self.verbosity
    }

    /// Writes an informational line unconditionally.
    pub fn info(&mut self, text: impl Into<String>) {
        self.emit(&Message::info(text.into()));
    }

    /// Writes an informational line when `flag` is enabled.
    pub fn verbose(&mut self, flag: InfoFlag, text: impl Into<String>) {
        if self.verbosity.info_gte(flag, 1) {
            self.info(text);
        }
    }

    /// Writes an `ERROR:` line to the error stream.
    pub fn error(&mut self, text: impl Into<String>) {
        self.emit(&Message::error(text.into()));
    }

    /// Writes a message to the stream matching its severity.
    pub fn emit(&mut self, message: &Message) {
        let result = if message.severity().is_error_stream() {
            self.stderr.write(message)
        } else {
            self.stdout.write(message)
        };
        self.write_failed |= result.is_err();
    }

    /// Flushes both streams.
    pub fn flush(&mut self) {
        let stdout = self.stdout.flush();
        let stderr = self.stderr.flush();
        self.write_failed |= stdout.is_err() || stderr.is_err();
    }

    /// Reports whether any write or flush failed.
    #[must_use]
    pub const fn write_failed(&self) -> bool {
        self.write_failed
    }

    /// Returns the underlying writers.
    pub fn into_inner(self) -> (Out, Err) {
        (self.stdout.into_inner(), self.stderr.into_inner())
    }
}

/// Formats a path between double quotes for messages.
pub(crate) fn quoted(path: &Path) -> impl Display + '_ {
    struct Quoted<'a>(&'a Path);

    impl Display for Quoted<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "\"{}\"", self.0.display())
        }
    }

    Quoted(path)
}
