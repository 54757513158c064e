//! Lenient streaming UTF-8 decoder for byte-oriented names.
//!
//! Filenames on Unix are arbitrary byte strings. The decoder walks them one
//! byte at a time and yields every well-formed scalar value. Malformed input
//! never stops decoding: the byte that breaks a sequence is dropped together
//! with the partial sequence, the state returns to [`DecoderState::Accept`],
//! and decoding resumes with the following byte.
//!
//! Validity follows the well-formed byte table of the Unicode standard, so
//! overlong forms, UTF-16 surrogates, and values above U+10FFFF are rejected
//! at the first byte where they become detectable.

/// Position of the decoder within the current byte sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecoderState {
    /// Between scalars; the next byte starts a new sequence.
    Accept,
    /// Inside a multi-byte sequence with `remaining` continuation bytes left.
    Pending {
        /// Continuation bytes still required to complete the scalar.
        remaining: u8,
    },
    /// The last byte broke the sequence and was discarded.
    Reject,
}

/// Iterator over the scalar values of one name.
///
/// A decoder is created per name and is not reusable; call
/// [`ScalarDecoder::new`] again to decode another name.
///
/// # Examples
///
/// ```
/// use transliterate::ScalarDecoder;
///
/// let scalars: String = ScalarDecoder::new("café".as_bytes()).collect();
/// assert_eq!(scalars, "café");
///
/// let mut decoder = ScalarDecoder::new(b"file\xFFname");
/// let scalars: String = decoder.by_ref().collect();
/// assert_eq!(scalars, "filename");
/// assert_eq!(decoder.rejected(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ScalarDecoder<'a> {
    bytes: std::slice::Iter<'a, u8>,
    state: DecoderState,
    scalar: u32,
    lower: u8,
    upper: u8,
    rejected: usize,
}

const CONTINUATION_LOWER: u8 = 0x80;
const CONTINUATION_UPPER: u8 = 0xBF;

impl<'a> ScalarDecoder<'a> {
    /// Creates a decoder positioned at the start of `name`.
    #[must_use]
    pub fn new(name: &'a [u8]) -> Self {
        Self {
            bytes: name.iter(),
            state: DecoderState::Accept,
            scalar: 0,
            lower: CONTINUATION_LOWER,
            upper: CONTINUATION_UPPER,
            rejected: 0,
        }
    }

    /// Returns the current decoder state.
    #[must_use]
    pub const fn state(&self) -> DecoderState {
        self.state
    }

    /// Number of bytes discarded so far because they broke a sequence.
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    fn step(&mut self, byte: u8) -> Option<char> {
        match self.state {
            DecoderState::Accept | DecoderState::Reject => self.start(byte),
            DecoderState::Pending { remaining } => self.continue_sequence(byte, remaining),
        }
    }

    fn start(&mut self, byte: u8) -> Option<char> {
        let (remaining, initial, lower, upper) = match byte {
            0x00..=0x7F => {
                self.state = DecoderState::Accept;
                return Some(char::from(byte));
            }
            0xC2..=0xDF => (1, byte & 0x1F, CONTINUATION_LOWER, CONTINUATION_UPPER),
            0xE0 => (2, byte & 0x0F, 0xA0, CONTINUATION_UPPER),
            0xED => (2, byte & 0x0F, CONTINUATION_LOWER, 0x9F),
            0xE1..=0xEC | 0xEE..=0xEF => (2, byte & 0x0F, CONTINUATION_LOWER, CONTINUATION_UPPER),
            0xF0 => (3, byte & 0x07, 0x90, CONTINUATION_UPPER),
            0xF1..=0xF3 => (3, byte & 0x07, CONTINUATION_LOWER, CONTINUATION_UPPER),
            0xF4 => (3, byte & 0x07, CONTINUATION_LOWER, 0x8F),
            // Stray continuation bytes, overlong leads, and bytes past U+10FFFF.
            _ => {
                self.reject();
                return None;
            }
        };

        self.scalar = u32::from(initial);
        self.lower = lower;
        self.upper = upper;
        self.state = DecoderState::Pending { remaining };
        None
    }

    fn continue_sequence(&mut self, byte: u8, remaining: u8) -> Option<char> {
        if !(self.lower..=self.upper).contains(&byte) {
            self.reject();
            return None;
        }

        self.scalar = (self.scalar << 6) | u32::from(byte & 0x3F);
        self.lower = CONTINUATION_LOWER;
        self.upper = CONTINUATION_UPPER;

        if remaining > 1 {
            self.state = DecoderState::Pending {
                remaining: remaining - 1,
            };
            return None;
        }

        self.state = DecoderState::Accept;
        // The byte ranges above exclude surrogates and out-of-range values, so
        // the conversion only fails if that table is wrong.
        let decoded = char::from_u32(self.scalar);
        if decoded.is_none() {
            self.rejected += 1;
        }
        decoded
    }

    fn reject(&mut self) {
        self.state = DecoderState::Reject;
        self.scalar = 0;
        self.lower = CONTINUATION_LOWER;
        self.upper = CONTINUATION_UPPER;
        self.rejected += 1;
    }
}

impl Iterator for ScalarDecoder<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        while let Some(&byte) = self.bytes.next() {
            if let Some(scalar) = self.step(byte) {
                return Some(scalar);
            }
        }
        // An unfinished sequence at end of name is dropped silently.
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.bytes.len()))
    }
}

impl std::iter::FusedIterator for ScalarDecoder<'_> {}
