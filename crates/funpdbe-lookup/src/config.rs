//! Lookup client configuration.
//!
//! The base URL defaults to the production PDBe API. Override via
//! environment variables or explicit construction for mirrors and tests.

use url::Url;

/// Production endpoint of the PDBe residue listing API.
pub const PDBE_RESIDUE_LISTING_URL: &str =
    "https://www.ebi.ac.uk/pdbe/api/pdb/entry/residue_listing/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the residue listing lookup.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL; always ends with `/` so entry paths can be joined onto it.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl LookupConfig {
    /// Create a configuration for an explicit base URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("base_url", base_url)?,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Configuration pointing at the production PDBe API.
    pub fn pdbe() -> Result<Self, ConfigError> {
        Self::new(PDBE_RESIDUE_LISTING_URL)
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FUNPDBE_API_URL` (default: [`PDBE_RESIDUE_LISTING_URL`])
    /// - `FUNPDBE_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("FUNPDBE_API_URL")
            .unwrap_or_else(|_| PDBE_RESIDUE_LISTING_URL.to_string());
        Ok(Self {
            base_url: parse_base_url("FUNPDBE_API_URL", &raw)?,
            timeout_secs: std::env::var("FUNPDBE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

fn parse_base_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            source.to_string(),
            format!("'{raw}' cannot be used as a base URL"),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
