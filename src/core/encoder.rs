use crate::utils::{bytes_to_hex, wrap_envelope};

/// Encode `text` as `$HEX[<lowercase hex of its UTF-8 bytes>]`.
///
/// The result is always `6 + 2 * text.len()` characters long. Decoding it in
/// fast mode gives `text` back. Re-encoding a safe-mode decode of foreign
/// bytes does not, in general, reproduce those bytes: the text is re-encoded
/// as UTF-8, not in the charset it was recovered from.
pub fn encode(text: &str) -> String {
    wrap_envelope(&bytes_to_hex(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_plain_ascii() {
        assert_eq!(encode("marquee:"), "$HEX[6d6172717565653a]");
    }

    #[test]
    fn encodes_empty_string() {
        assert_eq!(encode(""), "$HEX[]");
    }

    #[test]
    fn encodes_multibyte_and_control_characters() {
        assert_eq!(encode("é"), "$HEX[c3a9]");
        assert_eq!(encode("a\tb"), "$HEX[610962]");
    }

    #[test]
    fn output_length_tracks_byte_length() {
        for text in ["", "x", "пароль", "🔑:secret"] {
            assert_eq!(encode(text).len(), 6 + 2 * text.len());
        }
    }
}
