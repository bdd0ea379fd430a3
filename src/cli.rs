use std::path::PathBuf;

use clap::Parser;

/// Whence natural-language date/time resolver.
#[derive(Parser)]
#[command(
    name = "whence",
    version,
    about = "Resolve natural-language dates against a reference instant"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Date/time expression, e.g. "next friday at 3pm".
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Reference instant as RFC 3339 (defaults to the system clock).
    #[arg(short, long)]
    pub reference: Option<String>,

    /// Override output format from config.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// How the resolved instant is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// RFC 3339 with offset, e.g. 2022-12-05T15:00:00Z.
    Iso,
    /// Unix timestamp in seconds.
    Unix,
}
