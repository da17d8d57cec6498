//! Lookup error types.

/// Errors from residue listing lookups.
///
/// These are faults, not validation outcomes: an empty listing is returned
/// as `Ok` and judged by the cross-validator.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The API returned a non-2xx status other than 404.
    #[error("PDBe API {endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body was not a residue listing.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The lookup could not be served for a non-HTTP reason.
    #[error("lookup {endpoint} unavailable: {reason}")]
    Unavailable { endpoint: String, reason: String },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
