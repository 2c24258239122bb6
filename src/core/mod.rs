pub mod charset;
pub mod config;
pub mod encoder;
pub mod errors;
pub mod transcoder;

pub use charset::{ChardetngDetector, CharsetDetector, CharsetGuess};
pub use config::ConverterConfig;
pub use encoder::encode;
pub use errors::{ConverterError, DecodeError, DecodeOutcome};
pub use transcoder::{decode, DecodeStrategy, Transcoder};
