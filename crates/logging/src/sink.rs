//! crates/logging/src/sink.rs
//! Streaming sink that renders [`Message`] values into a writer.

use std::io::{self, Write};

use crate::message::Message;

/// Streaming sink that renders [`Message`] values into an [`io::Write`] target.
///
/// The sink owns the underlying writer, which is usually a locked standard
/// stream or, in tests, a `Vec<u8>`.
///
/// # Examples
///
/// ```
/// use logging::{Message, MessageSink};
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write(&Message::info("Renaming \"é\" to \"e\"..."))?;
/// sink.write(&Message::error("\"x\" already exists."))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "Renaming \"é\" to \"e\"...\nERROR: \"x\" already exists.\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MessageSink<W> {
    writer: W,
}

impl<W> MessageSink<W> {
    /// Creates a sink that writes one message per line.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes a single message followed by a newline.
    pub fn write(&mut self, message: &Message) -> io::Result<()> {
        message.render_line_to_writer(&mut self.writer)
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
