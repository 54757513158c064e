//! Conversion between native path segments and the byte text used internally.
//!
//! All decision and transliteration logic works on one representation: the
//! UTF-8-shaped bytes of a single path segment. On Unix that is the raw
//! `OsStr` bytes, which may be malformed and are decoded leniently later. On
//! Windows the UTF-16 segment is decoded to UTF-8, replacing unpaired
//! surrogates with U+FFFD.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

use crate::error::EncodingError;

/// Converts single path segments to and from the internal byte text.
pub trait TextCodec {
    /// Returns the internal byte text for a native segment.
    fn encode_name<'a>(&self, name: &'a OsStr) -> Cow<'a, [u8]>;

    /// Builds a native segment from internal byte text.
    ///
    /// Fails when the bytes cannot name a single sibling entry: empty text,
    /// separators, NUL bytes, `.` or `..`, or text the platform cannot represent.
    fn decode_name(&self, bytes: &[u8]) -> Result<OsString, EncodingError>;
}

/// Codec for the platform this binary was built for.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NativeCodec;

#[cfg(windows)]
const SEPARATORS: &[u8] = b"/\\";
#[cfg(not(windows))]
const SEPARATORS: &[u8] = b"/";

fn validate_segment(bytes: &[u8]) -> Result<(), EncodingError> {
    if bytes.is_empty() {
        return Err(EncodingError::EmptyName);
    }
    if let Some(&separator) = bytes.iter().find(|byte| SEPARATORS.contains(byte)) {
        return Err(EncodingError::SeparatorInName { separator });
    }
    if bytes.contains(&0) {
        return Err(EncodingError::NulInName);
    }
    match bytes {
        b"." => Err(EncodingError::DotSegment { parent: false }),
        b".." => Err(EncodingError::DotSegment { parent: true }),
        _ => Ok(()),
    }
}

#[cfg(unix)]
impl TextCodec for NativeCodec {
    fn encode_name<'a>(&self, name: &'a OsStr) -> Cow<'a, [u8]> {
        use std::os::unix::ffi::OsStrExt;

        Cow::Borrowed(name.as_bytes())
    }

    fn decode_name(&self, bytes: &[u8]) -> Result<OsString, EncodingError> {
        use std::os::unix::ffi::OsStringExt;

        validate_segment(bytes)?;
        Ok(OsString::from_vec(bytes.to_vec()))
    }
}

#[cfg(not(unix))]
impl TextCodec for NativeCodec {
    fn encode_name<'a>(&self, name: &'a OsStr) -> Cow<'a, [u8]> {
        match name.to_str() {
            Some(text) => Cow::Borrowed(text.as_bytes()),
            None => Cow::Owned(name.to_string_lossy().into_owned().into_bytes()),
        }
    }

    fn decode_name(&self, bytes: &[u8]) -> Result<OsString, EncodingError> {
        validate_segment(bytes)?;
        let text = std::str::from_utf8(bytes).map_err(|_| EncodingError::NotRepresentable)?;
        Ok(OsString::from(text))
    }
}
