//! `$HEX[...]` to text.
//!
//! The transcoder is a pure function of (envelope, strategy): it holds a
//! detector and a confidence threshold, never logs a failure itself, and
//! hands every failure back to the caller as data.

use crate::core::charset::{decode_with_label, ChardetngDetector, CharsetDetector};
use crate::core::config::ConverterConfig;
use crate::core::errors::{DecodeError, DecodeOutcome};
use crate::utils::{hex_to_bytes, unwrap_envelope};

/// How recovered bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    /// Strict UTF-8, no guessing.
    Fast,
    /// Detect the charset, then decode strictly in it.
    Safe,
}

#[derive(Debug, Clone)]
pub struct Transcoder<D = ChardetngDetector> {
    detector: D,
    min_confidence: f32,
}

impl Transcoder<ChardetngDetector> {
    pub fn new() -> Self {
        Self::with_detector(ChardetngDetector::new())
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::with_detector(ChardetngDetector::from_config(config))
            .min_confidence(config.min_confidence)
    }
}

impl Default for Transcoder<ChardetngDetector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: CharsetDetector> Transcoder<D> {
    /// Accepts any guess the detector makes until a threshold is set.
    pub fn with_detector(detector: D) -> Self {
        Self { detector, min_confidence: 0.0 }
    }

    pub fn min_confidence(mut self, threshold: f32) -> Self {
        self.min_confidence = threshold;
        self
    }

    /// Decode a full `$HEX[...]` envelope.
    pub fn decode(&self, envelope: &str, strategy: DecodeStrategy) -> DecodeOutcome {
        let digits = unwrap_envelope(envelope)?;
        let bytes = hex_to_bytes(digits)?;
        self.resolve(&bytes, strategy)
    }

    /// Turn raw bytes into text under `strategy`.
    pub fn resolve(&self, bytes: &[u8], strategy: DecodeStrategy) -> DecodeOutcome {
        match strategy {
            DecodeStrategy::Fast => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| DecodeError::undecodable("UTF-8")),
            DecodeStrategy::Safe => self.resolve_detected(bytes),
        }
    }

    fn resolve_detected(&self, bytes: &[u8]) -> DecodeOutcome {
        // Detection over nothing is meaningless.
        if bytes.is_empty() {
            return Ok(String::new());
        }

        let guess = self
            .detector
            .detect(bytes)
            .filter(|g| !g.name.trim().is_empty() && g.confidence >= self.min_confidence)
            .ok_or(DecodeError::NoConfidentCharset { threshold: self.min_confidence })?;

        tracing::trace!(charset = %guess.name, confidence = guess.confidence, "using charset guess");
        decode_with_label(&guess.name, bytes)
    }
}

/// Decode with the default chardetng-backed transcoder.
pub fn decode(envelope: &str, strategy: DecodeStrategy) -> DecodeOutcome {
    Transcoder::new().decode(envelope, strategy)
}
