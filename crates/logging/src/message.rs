//! crates/logging/src/message.rs
//! User-visible diagnostic messages.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

/// Severity of a user-visible message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    /// Informational message, routed to standard output.
    Info,
    /// Error message, routed to the error stream.
    Error,
}

impl Severity {
    const fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Info => None,
            Self::Error => Some("ERROR: "),
        }
    }

    /// Reports whether messages of this severity belong on the error stream.
    #[must_use]
    pub const fn is_error_stream(self) -> bool {
        matches!(self, Self::Error)
    }
}

/// A single diagnostic line.
///
/// Messages own their text so callers can build them with `format!` and pass
/// them around without lifetimes. Rendering never allocates beyond the text
/// already stored in the message.
///
/// # Examples
///
/// ```
/// use logging::Message;
///
/// let message = Message::error("\"a\" doesn't exist.");
/// assert_eq!(message.to_string(), "ERROR: \"a\" doesn't exist.");
///
/// let message = Message::info("Renamed: 1, Skipped: 0, Total: 1");
/// assert_eq!(message.to_string(), "Renamed: 1, Skipped: 0, Total: 1");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    severity: Severity,
    text: Cow<'static, str>,
}

impl Message {
    /// Creates a message with an explicit severity.
    #[must_use]
    pub fn new<T: Into<Cow<'static, str>>>(severity: Severity, text: T) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    /// Creates an informational message.
    #[must_use]
    pub fn info<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Creates an error message.
    #[must_use]
    pub fn error<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Returns the message severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text without the severity prefix.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Streams the rendered message into `writer` without a trailing newline.
    pub fn render_to_writer<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        if let Some(prefix) = self.severity.prefix() {
            writer.write_all(prefix.as_bytes())?;
        }
        writer.write_all(self.text.as_bytes())
    }

    /// Streams the rendered message followed by a newline.
    pub fn render_line_to_writer<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.render_to_writer(writer)?;
        writer.write_all(b"\n")
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.severity.prefix() {
            f.write_str(prefix)?;
        }
        f.write_str(&self.text)
    }
}
