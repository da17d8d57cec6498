//! # HTTP Residue Listing Client
//!
//! Live [`StructureLookup`] against the PDBe API.
//!
//! | Status | Outcome |
//! |--------|---------|
//! | 2xx    | body decoded as a [`ResidueListing`] (`{}` decodes to an empty one) |
//! | 404    | empty listing; PDBe answers `{}` with 404 for unknown entries |
//! | other  | [`LookupError::Status`] |

use std::time::Duration;

use funpdbe_core::{ResidueListing, StructureId};
use url::Url;

use crate::config::{ConfigError, LookupConfig};
use crate::error::LookupError;
use crate::lookup::StructureLookup;

/// Real HTTP client for the PDBe residue listing endpoint.
#[derive(Debug, Clone)]
pub struct HttpStructureLookup {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpStructureLookup {
    /// Create a new lookup client from configuration.
    ///
    /// Fails with [`LookupError::Config`] if the base URL cannot carry path
    /// segments, which a hand-built [`LookupConfig`] may hold.
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        if config.base_url.cannot_be_a_base() {
            return Err(not_a_base(&config.base_url).into());
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| LookupError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Full URL of one chain's residue listing.
    ///
    /// Each path segment is percent-encoded, so a chain label can never
    /// reach another resource or add a query or fragment.
    pub fn chain_url(
        &self,
        structure_id: &StructureId,
        chain_label: &str,
    ) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| not_a_base(&self.base_url))?
            .pop_if_empty()
            .extend([structure_id.as_str(), "chain", chain_label]);
        Ok(url)
    }
}

fn not_a_base(url: &Url) -> ConfigError {
    ConfigError::InvalidUrl("base_url".into(), format!("'{url}' cannot be used as a base URL"))
}

impl StructureLookup for HttpStructureLookup {
    async fn residue_listing(
        &self,
        structure_id: &StructureId,
        chain_label: &str,
    ) -> Result<ResidueListing, LookupError> {
        let endpoint = format!("GET {}/chain/{}", structure_id, chain_label);
        let url = self.chain_url(structure_id, chain_label)?;
        tracing::debug!(%url, "requesting residue listing");

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LookupError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(%url, "no residue listing for entry");
            return Ok(ResidueListing::default());
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LookupError::Status {
                endpoint,
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| LookupError::Deserialization {
            endpoint,
            source: e,
        })
    }

    fn lookup_name(&self) -> &str {
        "HttpStructureLookup"
    }
}
