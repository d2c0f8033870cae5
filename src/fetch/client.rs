use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use tracing::debug;

use crate::core::Region;

/// Base URL of the Ensembl REST service.
pub const ENSEMBL_REST_URL: &str = "https://rest.ensembl.org";

/// Content type requested from the sequence endpoint.
const SEQUENCE_CONTENT_TYPE: &str = "text/x-fasta";

// TODO: allow species and strand to be specified
const SPECIES: &str = "mouse";
const STRAND: i8 = 1;

/// Request timeout. Ensembl can be slow on large regions.
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("server returned {status} for region {region}")]
    Status {
        region: Region,
        status: reqwest::StatusCode,
    },

    #[error("request failed for region {region}: {source}")]
    Transport {
        region: Region,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Anything that can resolve a [`Region`] to sequence text.
///
/// The production implementation is [`SequenceFetcher`]; tests drive the
/// fetch loop with an in-memory fake instead of a live endpoint.
pub trait SequenceSource {
    /// Fetch the sequence text for one region, trimmed of surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on a non-2xx response or a transport-level
    /// failure. Either is terminal for the run.
    fn fetch(&mut self, region: &Region) -> Result<String, FetchError>;
}

/// Retrieves sequence text from the Ensembl REST sequence endpoint.
///
/// Issues one `GET {base}/sequence/region/{species}/{chr}:{start}..{end}:{strand}`
/// per region. Species and strand are fixed (mouse, forward strand); this is
/// a documented limitation, not a bug.
pub struct SequenceFetcher {
    client: Client,
    base_url: String,
}

impl SequenceFetcher {
    /// Create a fetcher against the public Ensembl REST service.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(ENSEMBL_REST_URL)
    }

    /// Create a fetcher against an alternative base URL (mirrors, tests).
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn region_url(&self, region: &Region) -> String {
        format!(
            "{}/sequence/region/{}/{}:{}..{}:{}",
            self.base_url, SPECIES, region.chromosome, region.start, region.end, STRAND
        )
    }
}

impl SequenceSource for SequenceFetcher {
    fn fetch(&mut self, region: &Region) -> Result<String, FetchError> {
        debug!("fetching sequence for {region}");

        let url = self.region_url(region);

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, SEQUENCE_CONTENT_TYPE)
            .send()
            .map_err(|source| FetchError::Transport {
                region: region.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                region: region.clone(),
                status,
            });
        }

        let body = response.text().map_err(|source| FetchError::Transport {
            region: region.clone(),
            source,
        })?;

        Ok(body.trim().to_string())
    }
}
