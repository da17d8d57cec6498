//! # funpdbe-lookup -- Remote Structure Lookup
//!
//! Fetches the authoritative residue numbering of a PDB entry chain from the
//! PDBe API:
//!
//! ```text
//! GET {base_url}{pdb_id}/chain/{chain_label}
//! ```
//!
//! with `pdb_id` lower-cased. The default base URL is
//! `https://www.ebi.ac.uk/pdbe/api/pdb/entry/residue_listing/`.
//!
//! ## Architecture
//!
//! [`StructureLookup`] is the capability the residue cross-validator is
//! generic over. Two implementations ship here:
//!
//! - [`HttpStructureLookup`] talks to the live API through `reqwest`.
//! - [`InMemoryStructureLookup`] serves canned listings and records every
//!   request, for tests and offline runs.
//!
//! No retries are performed. A transport failure is returned to the caller
//! as a [`LookupError`].

pub mod config;
pub mod error;
pub mod http;
pub mod lookup;

pub use config::{ConfigError, LookupConfig};
pub use error::LookupError;
pub use http::HttpStructureLookup;
pub use lookup::{InMemoryStructureLookup, LookupRequest, StructureLookup};
