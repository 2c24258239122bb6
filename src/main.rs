// src/main.rs
//! hc-hex entry point: converts a string or a wordlist to or from Hashcat's
//! $HEX[...] representation.
use anyhow::{Context, Result};
use clap::Parser;
use hashcat_hex::cli::Cli;
use hashcat_hex::core::ConverterConfig;
use hashcat_hex::service::{Mode, RunSummary, Runner};
use std::io::{self, BufWriter, IsTerminal};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = cli.mode().unwrap_or_else(|e| e.exit());

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("failed to initialise logging: {}", e);
    }

    match run(&cli, mode) {
        Ok(summary) => summary.exit_code(),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, mode: Mode) -> Result<RunSummary> {
    let mut config = ConverterConfig::load(cli.config.as_deref()).context("cannot load configuration")?;
    if let Some(threshold) = cli.min_confidence {
        config.min_confidence = threshold;
    }
    config.validate()?;

    let runner = Runner::from_config(&config, cli.policy());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    runner.run(&cli.source(), mode, &mut out)
}

/// Diagnostics go to stderr; stdout carries converted lines only.
fn init_logging(verbose: bool) -> Result<()> {
    let default_directives = if verbose { "warn,hashcat_hex=debug,hc_hex=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
