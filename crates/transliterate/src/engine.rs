//! Name-level transliteration built from the decoder, oracle, and codec.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use logging::trace_name;

use crate::codec::{NativeCodec, TextCodec};
use crate::decoder::ScalarDecoder;
use crate::error::EncodingError;
use crate::oracle::{AnyAscii, Transliterator};

/// Target computed for one path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TargetName {
    /// The final segment is already ASCII-safe, or the path has no final
    /// segment (`/`, `..`).
    Unchanged,
    /// The path the entry should be renamed to. Only the final segment
    /// differs from the source path.
    Changed(PathBuf),
    /// The transliterated segment cannot name a sibling entry.
    Invalid(EncodingError),
}

/// Turns path segments into their ASCII-safe equivalents.
///
/// The output is a pure function of the input bytes and the oracle; the
/// filesystem is never consulted.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use transliterate::{NameTransliterator, TargetName};
///
/// let names = NameTransliterator::new();
/// assert_eq!(names.transliterate("café.txt".as_bytes()), b"cafe.txt");
/// assert_eq!(
///     names.target_for(Path::new("docs/Déjà")),
///     TargetName::Changed(PathBuf::from("docs/Deja"))
/// );
/// assert_eq!(names.target_for(Path::new("docs/plain")), TargetName::Unchanged);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NameTransliterator<T = AnyAscii, C = NativeCodec> {
    oracle: T,
    codec: C,
}

impl NameTransliterator {
    /// Creates a transliterator using the built-in table and native codec.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            oracle: AnyAscii,
            codec: NativeCodec,
        }
    }
}

impl<T, C> NameTransliterator<T, C> {
    /// Creates a transliterator from explicit collaborators.
    #[must_use]
    pub const fn with_parts(oracle: T, codec: C) -> Self {
        Self { oracle, codec }
    }

    /// Returns the oracle.
    #[must_use]
    pub const fn oracle(&self) -> &T {
        &self.oracle
    }

    /// Returns the codec.
    #[must_use]
    pub const fn codec(&self) -> &C {
        &self.codec
    }
}

impl<T, C> NameTransliterator<T, C>
where
    T: Transliterator,
    C: TextCodec,
{
    /// Transliterates one name given as internal byte text.
    ///
    /// Each decoded scalar contributes the oracle's bytes in order; scalars
    /// without a replacement and malformed bytes contribute nothing.
    #[must_use]
    pub fn transliterate(&self, name: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(name.len());
        let mut decoder = ScalarDecoder::new(name);
        for scalar in decoder.by_ref() {
            output.extend_from_slice(self.oracle.lookup(scalar));
        }
        if decoder.rejected() > 0 {
            trace_name!(
                "dropped {} malformed byte(s) from {:?}",
                decoder.rejected(),
                String::from_utf8_lossy(name)
            );
        }
        output
    }

    /// Transliterates a native path segment, returning internal byte text.
    #[must_use]
    pub fn transliterate_os(&self, name: &OsStr) -> Vec<u8> {
        self.transliterate(&self.codec.encode_name(name))
    }

    /// Computes the rename target for `path`.
    ///
    /// Only the final segment is transliterated. The parent part is kept
    /// exactly as given so relative and absolute operands behave alike.
    #[must_use]
    pub fn target_for(&self, path: &Path) -> TargetName {
        let Some(file_name) = path.file_name() else {
            return TargetName::Unchanged;
        };

        let source = self.codec.encode_name(file_name);
        let ascii = self.transliterate(&source);
        if ascii.as_slice() == source.as_ref() {
            return TargetName::Unchanged;
        }

        match self.codec.decode_name(&ascii) {
            Ok(segment) => TargetName::Changed(path.with_file_name(segment)),
            Err(error) => TargetName::Invalid(error),
        }
    }
}
