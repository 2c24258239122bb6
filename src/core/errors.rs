use thiserror::Error;

/// Why a single input unit could not be converted.
///
/// Every variant is recoverable: the caller skips the unit and moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Input is not of the form `$HEX[...]`.
    #[error("input is not wrapped in $HEX[...]")]
    MalformedEnvelope,
    /// The digit run has an odd number of characters.
    #[error("odd number of hex digits: {0}")]
    OddHexLength(usize),
    /// A character outside `[0-9a-fA-F]` appears in the digit run.
    #[error("invalid hex digit {character:?} at offset {index}")]
    InvalidHexDigit { character: char, index: usize },
    /// The bytes are not valid text in the selected or guessed charset.
    #[error("bytes are not valid {charset}")]
    UndecodableBytes { charset: String },
    /// Charset detection produced nothing at or above the threshold.
    #[error("no charset guess reached confidence {threshold}")]
    NoConfidentCharset { threshold: f32 },
}

impl DecodeError {
    /// Stable name of the failure kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::MalformedEnvelope => "MalformedEnvelope",
            DecodeError::OddHexLength(_) => "OddHexLength",
            DecodeError::InvalidHexDigit { .. } => "InvalidHexDigit",
            DecodeError::UndecodableBytes { .. } => "UndecodableBytes",
            DecodeError::NoConfidentCharset { .. } => "NoConfidentCharset",
        }
    }

    pub(crate) fn undecodable(charset: impl Into<String>) -> Self {
        DecodeError::UndecodableBytes { charset: charset.into() }
    }
}

/// Result of decoding one unit: the text, or the reason it was rejected.
pub type DecodeOutcome = Result<String, DecodeError>;

/// Errors that stop a run rather than a single unit.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Configuration is missing, malformed or out of range.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<toml::de::Error> for ConverterError {
    fn from(err: toml::de::Error) -> Self {
        ConverterError::ConfigError(err.to_string())
    }
}
