mod cli;
mod config;
mod logging;

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use whence_civil::{DateTime, Offset};

use crate::cli::{Cli, OutputFormat};
use crate::config::WhenceConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => config::load(path)?,
        None => WhenceConfig::default(),
    };

    let reference = reference_instant(&cli, &config)?;
    let text = cli.text.join(" ");
    debug!(%reference, text, "resolving");

    let resolved = whence_engine::parse(&text, reference)?;

    match output_format(&cli, &config)? {
        OutputFormat::Iso => println!("{resolved}"),
        OutputFormat::Unix => println!("{}", resolved.unix_timestamp()),
    }
    Ok(())
}

/// The reference instant: the --reference flag, or the system clock at
/// the configured offset. The engine itself never reads a clock.
fn reference_instant(cli: &Cli, config: &WhenceConfig) -> Result<DateTime> {
    if let Some(text) = &cli.reference {
        return DateTime::parse_rfc3339(text).context("invalid --reference");
    }
    let offset = match &config.reference.offset {
        Some(text) => Offset::parse(text).context("invalid reference.offset in config")?,
        None => Offset::UTC,
    };
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?
        .as_secs() as i64;
    DateTime::from_unix(seconds, offset).context("system clock out of range")
}

fn output_format(cli: &Cli, config: &WhenceConfig) -> Result<OutputFormat> {
    if let Some(format) = cli.format {
        return Ok(format);
    }
    match config.output.format.as_str() {
        "iso" => Ok(OutputFormat::Iso),
        "unix" => Ok(OutputFormat::Unix),
        other => bail!("unknown output format {other:?} (expected \"iso\" or \"unix\")"),
    }
}
