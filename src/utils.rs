// src/utils.rs
//! Hex primitives shared by the encoder and the transcoder.
use hex::FromHexError;

use crate::core::errors::DecodeError;

/// Literal opening of a Hashcat hex field. Case-sensitive.
pub const ENVELOPE_PREFIX: &str = "$HEX[";
/// Literal closing of a Hashcat hex field.
pub const ENVELOPE_SUFFIX: char = ']';

/// Strip the `$HEX[` ... `]` wrapper and return the digit run between.
pub fn unwrap_envelope(s: &str) -> Result<&str, DecodeError> {
    s.strip_prefix(ENVELOPE_PREFIX)
        .and_then(|rest| rest.strip_suffix(ENVELOPE_SUFFIX))
        .ok_or(DecodeError::MalformedEnvelope)
}

/// Wrap an already rendered digit run as `$HEX[<digits>]`.
pub fn wrap_envelope(digits: &str) -> String {
    let mut out = String::with_capacity(ENVELOPE_PREFIX.len() + digits.len() + 1);
    out.push_str(ENVELOPE_PREFIX);
    out.push_str(digits);
    out.push(ENVELOPE_SUFFIX);
    out
}

/// Convert a run of hex digits (either case) to bytes.
///
/// Length and offsets are counted in characters. Odd length is reported
/// before any character is inspected.
pub fn hex_to_bytes(digits: &str) -> Result<Vec<u8>, DecodeError> {
    if !digits.is_ascii() {
        let len = digits.chars().count();
        if len % 2 != 0 {
            return Err(DecodeError::OddHexLength(len));
        }
        if let Some((index, character)) = digits.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(DecodeError::InvalidHexDigit { character, index });
        }
    }

    hex::decode(digits).map_err(|e| match e {
        FromHexError::OddLength => DecodeError::OddHexLength(digits.len()),
        FromHexError::InvalidHexCharacter { c, index } => {
            DecodeError::InvalidHexDigit { character: c, index }
        }
        // only produced by decode_to_slice, which is not used here
        FromHexError::InvalidStringLength => DecodeError::OddHexLength(digits.len()),
    })
}

/// Convert bytes to lowercase hex digits, most-significant nibble first.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
