//! Charset detection and label-driven decoding.
//!
//! Detection is abstracted behind [`CharsetDetector`] so the transcoder can be
//! driven by a stub in tests. The default implementation wraps `chardetng`,
//! which is deterministic for a given input.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use crate::core::config::ConverterConfig;
use crate::core::errors::DecodeError;

/// A detector's best guess for the charset of a byte string.
#[derive(Debug, Clone, PartialEq)]
pub struct CharsetGuess {
    /// IANA/WHATWG style label, e.g. "UTF-8" or "windows-1252".
    pub name: String,
    /// In `[0, 1]`.
    pub confidence: f32,
}

impl CharsetGuess {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self { name: name.into(), confidence }
    }
}

/// Guesses the text encoding of a byte string.
///
/// Implementations must return the same guess for the same input.
pub trait CharsetDetector {
    fn detect(&self, bytes: &[u8]) -> Option<CharsetGuess>;
}

impl<F> CharsetDetector for F
where
    F: Fn(&[u8]) -> Option<CharsetGuess>,
{
    fn detect(&self, bytes: &[u8]) -> Option<CharsetGuess> {
        self(bytes)
    }
}

/// Detector backed by `chardetng`.
///
/// chardetng always commits to an encoding and does not score it, so every
/// guess is reported with confidence 1.0.
#[derive(Debug, Clone)]
pub struct ChardetngDetector {
    allow_utf8: bool,
    tld: Option<String>,
}

impl ChardetngDetector {
    pub fn new() -> Self {
        Self { allow_utf8: true, tld: None }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self { allow_utf8: config.allow_utf8_guess, tld: None }.tld_hint(config.tld.as_deref())
    }

    /// Set the top-level domain hint. A hint chardetng cannot take (e.g.
    /// "co.uk") is dropped and detection runs without one.
    pub fn with_tld(self, tld: impl AsRef<str>) -> Self {
        self.tld_hint(Some(tld.as_ref()))
    }

    fn tld_hint(mut self, tld: Option<&str>) -> Self {
        self.tld = tld.and_then(|raw| {
            let hint = normalize_tld(raw);
            if hint.is_none() {
                tracing::warn!(tld = %raw, "ignoring unusable tld hint");
            }
            hint
        });
        self
    }

    pub fn allow_utf8(mut self, allow: bool) -> Self {
        self.allow_utf8 = allow;
        self
    }
}

impl Default for ChardetngDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CharsetDetector for ChardetngDetector {
    fn detect(&self, bytes: &[u8]) -> Option<CharsetGuess> {
        let mut detector = EncodingDetector::new();
        detector.feed(bytes, true);
        let encoding = detector.guess(self.tld.as_deref().map(str::as_bytes), self.allow_utf8);
        tracing::trace!(len = bytes.len(), charset = encoding.name(), "chardetng guess");
        Some(CharsetGuess::new(encoding.name(), 1.0))
    }
}

/// Canonical form of a top-level domain hint: trimmed, no leading '.', ASCII
/// lowercase. `None` when the result is empty or holds anything but
/// letters, digits and '-'.
pub(crate) fn normalize_tld(tld: &str) -> Option<String> {
    let hint = tld.trim().trim_start_matches('.').to_ascii_lowercase();
    let usable = !hint.is_empty() && hint.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    usable.then_some(hint)
}

/// Decode `bytes` strictly under the charset named by `label`.
///
/// Malformed sequences and unknown labels both fail; there is no
/// replacement character fallback and no BOM sniffing.
pub fn decode_with_label(label: &str, bytes: &[u8]) -> Result<String, DecodeError> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| DecodeError::undecodable(label))?;
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| DecodeError::undecodable(encoding.name()))
}
