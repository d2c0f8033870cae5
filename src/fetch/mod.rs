//! Sequence retrieval over the Ensembl REST API.
//!
//! - [`client`]: the HTTP fetcher and the [`SequenceSource`] seam
//! - [`rate`]: inter-request pacing
//! - [`pipeline`]: the sequential fetch loop

pub mod client;
pub mod pipeline;
pub mod rate;

/// Maximum outbound request rate against the remote service.
pub const MAX_REQUESTS_PER_SEC: u32 = 10;

pub use client::{FetchError, SequenceFetcher, SequenceSource, ENSEMBL_REST_URL};
pub use pipeline::{fetch_regions, PipelineError};
pub use rate::{Clock, RateLimiter, SystemClock};
