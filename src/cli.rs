use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use std::path::PathBuf;

use crate::core::transcoder::DecodeStrategy;
use crate::service::{ErrorPolicy, Mode, Source};

/// Hashcat $HEX[...] format encoder/decoder (library-facing definitions)
#[derive(Debug, Parser)]
#[command(name = "hc-hex", about = "Hashcat HEX format encoder/decoder", version)]
#[command(group(ArgGroup::new("source").required(true).args(["string", "file"])))]
#[command(group(ArgGroup::new("mode").required(true).args(["encode", "decode"])))]
#[command(group(ArgGroup::new("strategy").args(["fast", "safe"])))]
pub struct Cli {
    /// String to encode or decode
    #[arg(short, long, allow_hyphen_values = true)]
    pub string: Option<String>,

    /// File to encode or decode, one entry per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Encode into $HEX[...] format
    #[arg(short, long)]
    pub encode: bool,

    /// Decode from $HEX[...] format (requires --fast or --safe)
    #[arg(short, long)]
    pub decode: bool,

    /// Decode payloads as UTF-8 only
    #[arg(long, requires = "decode")]
    pub fast: bool,

    /// Detect the payload charset before decoding
    #[arg(long, requires = "decode")]
    pub safe: bool,

    /// Ignore decode errors: skip failed entries and exit 0
    #[arg(short, long)]
    pub ignore: bool,

    /// Report failed entries on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// TOML config file (defaults to $HC_HEX_CONFIG when set)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum charset detection confidence, 0.0 to 1.0 (overrides config)
    #[arg(long, value_name = "SCORE")]
    pub min_confidence: Option<f32>,
}

impl Cli {
    /// Resolve the conversion mode, including the decode strategy clap cannot require on its own.
    pub fn mode(&self) -> Result<Mode, clap::Error> {
        if self.encode {
            return Ok(Mode::Encode);
        }
        match (self.fast, self.safe) {
            (true, false) => Ok(Mode::Decode(DecodeStrategy::Fast)),
            (false, true) => Ok(Mode::Decode(DecodeStrategy::Safe)),
            _ => Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "--decode requires one of --fast or --safe",
            )),
        }
    }

    pub fn source(&self) -> Source {
        match (&self.string, &self.file) {
            (Some(text), _) => Source::Text(text.clone()),
            (None, Some(path)) => Source::File(path.clone()),
            // the "source" group is required, so clap never lets this through
            (None, None) => Source::Text(String::new()),
        }
    }

    pub fn policy(&self) -> ErrorPolicy {
        ErrorPolicy::new(self.ignore, self.verbose)
    }
}
