#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `transliterate` turns raw filesystem names into ASCII-safe equivalents.
//! It is the naming half of ascii-rename and never touches the filesystem.
//!
//! # Design
//!
//! - [`ScalarDecoder`] lazily decodes a byte-oriented name into Unicode scalar
//!   values, dropping malformed bytes instead of failing.
//! - [`Transliterator`] is the scalar-to-bytes lookup. [`AnyAscii`] backs it
//!   with the static tables of the `any_ascii` crate.
//! - [`TextCodec`] converts native path segments to the internal byte text and
//!   back. [`NativeCodec`] is the implementation for the build platform.
//! - [`NameTransliterator`] composes the three and computes the
//!   [`TargetName`] for a path.
//!
//! # Invariants
//!
//! - Transliteration is deterministic and never panics, whatever the input.
//! - ASCII input is returned unchanged.
//! - Output is written to a growable buffer; replacements may be longer than
//!   the bytes they replace.
//!
//! # Errors
//!
//! Malformed input is recovered inside the decoder and never reported.
//! [`EncodingError`] only describes transliterated text that cannot become a
//! path segment (empty, contains a separator or NUL, or is unrepresentable).

mod codec;
mod decoder;
mod engine;
mod error;
mod oracle;

pub use codec::{NativeCodec, TextCodec};
pub use decoder::{DecoderState, ScalarDecoder};
pub use engine::{NameTransliterator, TargetName};
pub use error::EncodingError;
pub use oracle::{AnyAscii, Transliterator};
