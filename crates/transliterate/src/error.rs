use thiserror::Error;

/// Reasons a transliterated name cannot be turned back into a path segment.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EncodingError {
    /// Every scalar of the name was dropped.
    #[error("name transliterates to an empty string")]
    EmptyName,

    /// The replacement text contains a path separator.
    #[error("name transliterates to text containing the path separator '{}'", char::from(*.separator))]
    SeparatorInName {
        /// The offending separator byte.
        separator: u8,
    },

    /// The replacement text contains a NUL byte.
    #[error("name transliterates to text containing a NUL byte")]
    NulInName,

    /// The replacement text is `.` or `..`, which name the directory itself
    /// or its parent.
    #[error("name transliterates to the special entry '{}'", if *.parent { ".." } else { "." })]
    DotSegment {
        /// The text is `..` rather than `.`.
        parent: bool,
    },

    /// The bytes are not valid text for the platform's native path encoding.
    #[error("name is not representable in the native path encoding")]
    NotRepresentable,
}
