//! Raw producer text handling.

use std::borrow::Cow;

/// Convert a raw byte span from the tokenizer into text.
///
/// The producer guarantees neither NUL termination nor that a span ends on
/// a character boundary. A single trailing NUL is stripped (the last byte
/// is checked before any copy is made), valid UTF-8 is borrowed as-is and
/// anything else is copied with replacement characters.
#[must_use]
pub fn text_from_raw(raw: &[u8]) -> Cow<'_, str> {
    let raw = match raw.last() {
        Some(0) => &raw[..raw.len() - 1],
        _ => raw,
    };
    String::from_utf8_lossy(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_borrows() {
        let converted = text_from_raw(b"plain text");
        assert!(matches!(converted, Cow::Borrowed(_)));
        assert_eq!(converted, "plain text");
    }

    #[test]
    fn test_trailing_nul_is_stripped() {
        assert_eq!(text_from_raw(b"terminated\0"), "terminated");
        // Only the final byte is considered; embedded NULs pass through.
        assert_eq!(text_from_raw(b"inner\0kept\0"), "inner\0kept");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let converted = text_from_raw(b"bad \xff byte");
        assert!(matches!(converted, Cow::Owned(_)));
        assert_eq!(converted, "bad \u{fffd} byte");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(text_from_raw(b""), "");
        assert_eq!(text_from_raw(b"\0"), "");
    }
}
