//! # Structure Lookup Capability
//!
//! [`StructureLookup`] abstracts over where residue listings come from.
//! The cross-validator only ever calls [`StructureLookup::residue_listing`],
//! one chain at a time, awaiting each call before issuing the next.

use std::collections::HashMap;
use std::future::Future;

use funpdbe_core::{ResidueListing, StructureId};
use parking_lot::Mutex;

use crate::error::LookupError;

/// Source of authoritative residue listings.
///
/// Implementations must be `Send + Sync` so one lookup can serve several
/// validators. The returned future must be `Send` so callers can drive it
/// from a multi-threaded runtime.
pub trait StructureLookup: Send + Sync {
    /// Fetch the residue listing of one chain of an entry.
    ///
    /// An entry the source has no data for yields an empty listing, not an
    /// error.
    fn residue_listing(
        &self,
        structure_id: &StructureId,
        chain_label: &str,
    ) -> impl Future<Output = Result<ResidueListing, LookupError>> + Send;

    /// Human-readable name of the implementation, for logs.
    fn lookup_name(&self) -> &str;
}

/// One request seen by an [`InMemoryStructureLookup`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupRequest {
    pub structure_id: String,
    pub chain_label: String,
}

impl LookupRequest {
    pub fn new(structure_id: impl Into<String>, chain_label: impl Into<String>) -> Self {
        Self {
            structure_id: structure_id.into(),
            chain_label: chain_label.into(),
        }
    }
}

enum CannedResponse {
    Listing(ResidueListing),
    Unavailable(String),
}

/// Lookup backed by canned listings.
///
/// Unknown `(entry, chain)` pairs answer with an empty listing, the same way
/// PDBe answers for obsoleted entries. Every request is recorded in order.
#[derive(Default)]
pub struct InMemoryStructureLookup {
    responses: HashMap<LookupRequest, CannedResponse>,
    requests: Mutex<Vec<LookupRequest>>,
}

impl InMemoryStructureLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `listing` for one chain of an entry.
    pub fn with_listing(
        mut self,
        structure_id: &StructureId,
        chain_label: &str,
        listing: ResidueListing,
    ) -> Self {
        self.responses.insert(
            LookupRequest::new(structure_id.as_str(), chain_label),
            CannedResponse::Listing(listing),
        );
        self
    }

    /// Fail every request for one chain of an entry with a transport-style
    /// error.
    pub fn with_failure(
        mut self,
        structure_id: &StructureId,
        chain_label: &str,
        reason: impl Into<String>,
    ) -> Self {
        self.responses.insert(
            LookupRequest::new(structure_id.as_str(), chain_label),
            CannedResponse::Unavailable(reason.into()),
        );
        self
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<LookupRequest> {
        self.requests.lock().clone()
    }
}

impl std::fmt::Debug for InMemoryStructureLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStructureLookup")
            .field("canned", &self.responses.len())
            .field("requests", &self.requests.lock().len())
            .finish()
    }
}

impl StructureLookup for InMemoryStructureLookup {
    async fn residue_listing(
        &self,
        structure_id: &StructureId,
        chain_label: &str,
    ) -> Result<ResidueListing, LookupError> {
        let request = LookupRequest::new(structure_id.as_str(), chain_label);
        self.requests.lock().push(request.clone());

        match self.responses.get(&request) {
            Some(CannedResponse::Listing(listing)) => Ok(listing.clone()),
            Some(CannedResponse::Unavailable(reason)) => Err(LookupError::Unavailable {
                endpoint: format!("{}/chain/{}", request.structure_id, request.chain_label),
                reason: reason.clone(),
            }),
            None => Ok(ResidueListing::default()),
        }
    }

    fn lookup_name(&self) -> &str {
        "InMemoryStructureLookup"
    }
}
