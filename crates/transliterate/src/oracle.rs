//! Scalar-to-ASCII lookup.

/// Maps one scalar value to its ASCII replacement bytes.
///
/// Implementations must be pure: the same scalar always yields the same bytes.
/// An empty slice means the scalar has no replacement and is dropped.
pub trait Transliterator {
    /// Returns the replacement bytes for `scalar`.
    fn lookup(&self, scalar: char) -> &[u8];
}

impl<T: Transliterator + ?Sized> Transliterator for &T {
    fn lookup(&self, scalar: char) -> &[u8] {
        (**self).lookup(scalar)
    }
}

static ASCII_IDENTITY: [u8; 128] = {
    let mut table = [0u8; 128];
    let mut index = 0;
    while index < table.len() {
        table[index] = index as u8;
        index += 1;
    }
    table
};

/// Transliteration backed by the compiled-in `any_ascii` tables.
///
/// The tables are static and read-only, so the type carries no state and can
/// be copied freely. ASCII scalars map to themselves.
///
/// # Examples
///
/// ```
/// use transliterate::{AnyAscii, Transliterator};
///
/// assert_eq!(AnyAscii.lookup('é'), b"e");
/// assert_eq!(AnyAscii.lookup('x'), b"x");
/// assert_eq!(AnyAscii.lookup('Æ'), b"Ae");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AnyAscii;

impl Transliterator for AnyAscii {
    fn lookup(&self, scalar: char) -> &[u8] {
        if scalar.is_ascii() {
            let index = scalar as usize;
            return &ASCII_IDENTITY[index..=index];
        }
        any_ascii::any_ascii_char(scalar).as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_maps_to_itself() {
        for byte in 0u8..128 {
            let scalar = char::from(byte);
            assert_eq!(AnyAscii.lookup(scalar), &[byte]);
        }
    }

    #[test]
    fn latin_accents_are_stripped() {
        assert_eq!(AnyAscii.lookup('ç'), b"c");
        assert_eq!(AnyAscii.lookup('à'), b"a");
        assert_eq!(AnyAscii.lookup('É'), b"E");
    }

    #[test]
    fn replacements_may_be_longer_than_the_source() {
        let replacement = AnyAscii.lookup('日');
        assert!(replacement.len() > 1);
        assert!(replacement.is_ascii());
    }

    #[test]
    fn lookup_through_reference() {
        let oracle = AnyAscii;
        let by_ref: &dyn Transliterator = &oracle;
        assert_eq!(by_ref.lookup('ñ'), b"n");
    }
}
