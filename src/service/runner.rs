//! Line-oriented driver: feeds units to the encoder or transcoder, writes
//! results in input order and keeps count of what failed.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::core::charset::{ChardetngDetector, CharsetDetector};
use crate::core::config::ConverterConfig;
use crate::core::encoder::encode;
use crate::core::transcoder::{DecodeStrategy, Transcoder};
use crate::service::policy::{Disposition, ErrorPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode(DecodeStrategy),
}

/// Where units come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A single unit given directly.
    Text(String),
    /// One unit per line.
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub emitted: usize,
    pub suppressed: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, disposition: &Disposition) {
        self.processed += 1;
        match disposition {
            Disposition::Emit(_) => self.emitted += 1,
            Disposition::Suppressed(_) => self.suppressed += 1,
            Disposition::Failed(_) => self.failed += 1,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

pub struct Runner<D = ChardetngDetector> {
    transcoder: Transcoder<D>,
    policy: ErrorPolicy,
    strip_carriage_return: bool,
    skip_blank_lines: bool,
}

impl Runner<ChardetngDetector> {
    pub fn from_config(config: &ConverterConfig, policy: ErrorPolicy) -> Self {
        Self {
            transcoder: Transcoder::from_config(config),
            policy,
            strip_carriage_return: config.strip_carriage_return,
            skip_blank_lines: config.skip_blank_lines,
        }
    }
}

impl<D: CharsetDetector> Runner<D> {
    pub fn new(transcoder: Transcoder<D>, policy: ErrorPolicy) -> Self {
        Self { transcoder, policy, strip_carriage_return: true, skip_blank_lines: false }
    }

    /// Convert one unit and classify the result.
    pub fn process_unit(&self, input: &str, mode: Mode) -> Disposition {
        match mode {
            Mode::Encode => Disposition::Emit(encode(input)),
            Mode::Decode(strategy) => self.policy.dispose(input, self.transcoder.decode(input, strategy)),
        }
    }

    /// Process every unit of `source`, writing results to `out`.
    ///
    /// Per-unit failures are counted in the summary. Only I/O problems
    /// (unreadable file, closed output) are returned as errors.
    pub fn run<W: Write>(&self, source: &Source, mode: Mode, out: &mut W) -> Result<RunSummary> {
        let summary = match source {
            Source::Text(text) => {
                let mut summary = RunSummary::default();
                self.handle(text, mode, out, &mut summary)?;
                summary
            }
            Source::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open input file {}", path.display()))?;
                self.run_lines(BufReader::new(file), mode, out)
                    .with_context(|| format!("while processing {}", path.display()))?
            }
        };
        out.flush().context("cannot flush output")?;

        tracing::info!(
            processed = summary.processed,
            emitted = summary.emitted,
            suppressed = summary.suppressed,
            failed = summary.failed,
            "run finished"
        );
        Ok(summary)
    }

    /// Process a stream with one unit per line.
    ///
    /// Lines are split on '\n' and bytes that are not valid UTF-8 are dropped
    /// before the unit reaches the converter.
    pub fn run_lines<R: BufRead, W: Write>(&self, reader: R, mode: Mode, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for (index, raw) in reader.split(b'\n').enumerate() {
            let mut raw = raw.with_context(|| format!("cannot read line {}", index + 1))?;
            if self.strip_carriage_return && raw.last() == Some(&b'\r') {
                raw.pop();
            }
            let line = valid_utf8_text(&raw);
            if self.skip_blank_lines && line.is_empty() {
                tracing::trace!(line = index + 1, "skipping blank line");
                continue;
            }
            self.handle(&line, mode, out, &mut summary)?;
        }
        Ok(summary)
    }

    fn handle<W: Write>(&self, input: &str, mode: Mode, out: &mut W, summary: &mut RunSummary) -> Result<()> {
        let disposition = self.process_unit(input, mode);
        summary.record(&disposition);
        if let Disposition::Emit(text) = disposition {
            writeln!(out, "{}", text).context("cannot write output")?;
        }
        Ok(())
    }
}

/// Keep the valid UTF-8 runs of `bytes`, dropping everything else.
fn valid_utf8_text(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
