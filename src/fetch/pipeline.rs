use std::io::Write;

use thiserror::Error;

use crate::core::Region;
use crate::fetch::client::{FetchError, SequenceSource};
use crate::fetch::rate::{Clock, RateLimiter};
use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to write output: {0}")]
    Output(std::io::Error),
}

/// Run the fetch loop: for each region, wait for a rate-limiter slot, fetch
/// the sequence, and write it to `out` as one line.
///
/// Results are streamed in input order. The first parse, fetch, or write
/// error aborts the loop; regions already fetched have already been written.
///
/// # Errors
///
/// Returns the first [`PipelineError`] encountered.
pub fn fetch_regions<S, C, W>(
    regions: impl Iterator<Item = Result<Region, ParseError>>,
    source: &mut S,
    limiter: &mut RateLimiter<C>,
    out: &mut W,
) -> Result<(), PipelineError>
where
    S: SequenceSource,
    C: Clock,
    W: Write,
{
    for region in regions {
        let region = region?;

        limiter.acquire();
        let sequence = source.fetch(&region)?;

        writeln!(out, "{sequence}").map_err(PipelineError::Output)?;
    }

    Ok(())
}
