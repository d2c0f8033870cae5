//! Command-line interface for seq-fetch.
//!
//! ```text
//! # Fetch sequences for the regions listed in regions.csv
//! seq-fetch regions.csv
//!
//! # With debug logging
//! seq-fetch --log-level debug regions.csv
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::fetch::{fetch_regions, RateLimiter, SequenceFetcher, MAX_REQUESTS_PER_SEC};
use crate::parsing::RegionSource;

#[derive(Parser)]
#[command(name = "seq-fetch")]
#[command(version)]
#[command(about = "Fetch nucleotide sequences for genomic regions from Ensembl")]
#[command(
    long_about = "seq-fetch reads a file of genomic regions (one 'chromosome,start,end' per line)\nand prints the nucleotide sequence for each region to stdout, one per line, in\ninput order.\n\nSequences are retrieved from the Ensembl REST API, rate limited to 10 requests\nper second. The run aborts on the first malformed line or failed request."
)]
pub struct Cli {
    /// File containing locations of regions to get sequences for
    #[arg(required = true)]
    pub regions_file: PathBuf,

    /// Set logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive string for the tracing `EnvFilter`.
    #[must_use]
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Error => "seq_fetch=error",
            Self::Warn => "seq_fetch=warn",
            Self::Info => "seq_fetch=info",
            Self::Debug => "seq_fetch=debug",
            Self::Trace => "seq_fetch=trace",
        }
    }
}

/// Execute the fetch run against stdout.
///
/// # Errors
///
/// Returns an error if the regions file cannot be opened or parsed, if any
/// request fails, or if writing to stdout fails. All errors are terminal.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    info!(
        "reading region locations from '{}'",
        cli.regions_file.display()
    );

    let regions = RegionSource::open(&cli.regions_file)?;
    let mut fetcher = SequenceFetcher::new()?;
    let mut limiter = RateLimiter::new(MAX_REQUESTS_PER_SEC);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    fetch_regions(regions, &mut fetcher, &mut limiter, &mut out)?;
    out.flush()?;

    Ok(())
}
