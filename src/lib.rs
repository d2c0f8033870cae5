//! # seq-fetch
//!
//! A library for batch retrieval of nucleotide sequences from the Ensembl
//! REST API.
//!
//! Given a list of genomic regions, `seq-fetch` issues one HTTP request per
//! region, paced to a fixed maximum request rate, and yields the sequence
//! text for each region in input order. The tool is deliberately fail-fast:
//! a malformed region line or a failed request aborts the whole run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seq_fetch::core::Region;
//! use seq_fetch::fetch::{SequenceFetcher, SequenceSource};
//!
//! let mut fetcher = SequenceFetcher::new().unwrap();
//! let sequence = fetcher.fetch(&Region::new("1", 1000, 1100)).unwrap();
//! println!("{sequence}");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: the [`Region`](core::Region) data type
//! - [`parsing`]: region list file parsing
//! - [`fetch`]: HTTP client, rate limiter, and the fetch loop
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod core;
pub mod fetch;
pub mod parsing;

// Re-export commonly used types for convenience
pub use core::Region;
pub use fetch::{FetchError, RateLimiter, SequenceFetcher, SequenceSource};
pub use parsing::{ParseError, RegionSource};
