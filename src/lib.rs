// src/lib.rs
//! Conversion between plain text and Hashcat's `$HEX[...]` password
//! representation.
//!
//! Encoding is a byte-exact transform of the UTF-8 text. Decoding recovers
//! the raw bytes and then renders them as text, either as strict UTF-8
//! ([`DecodeStrategy::Fast`]) or in a detected charset
//! ([`DecodeStrategy::Safe`]).
//!
//! ```
//! use hashcat_hex::{decode, encode, DecodeStrategy};
//!
//! assert_eq!(encode("marquee:"), "$HEX[6d6172717565653a]");
//! assert_eq!(decode("$HEX[6d6172717565653a]", DecodeStrategy::Fast).unwrap(), "marquee:");
//! ```

pub mod cli;
pub mod core;
pub mod service;
pub mod utils;

pub use crate::core::{
    decode, encode, ChardetngDetector, CharsetDetector, CharsetGuess, ConverterConfig, ConverterError,
    DecodeError, DecodeOutcome, DecodeStrategy, Transcoder,
};
pub use crate::service::{Disposition, ErrorPolicy, Mode, RunSummary, Runner, Source};
