//! # PDBe Residue Listings
//!
//! Typed model of the PDBe `residue_listing/<pdb_id>/chain/<label>`
//! response:
//!
//! ```json
//! { "1cbs": { "molecules": [ { "entity_id": 1, "chains": [
//!     { "chain_id": "A", "residues": [
//!         { "author_residue_number": 1, "author_insertion_code": "", "residue_name": "PRO" }
//!     ] } ] } ] } }
//! ```
//!
//! An empty object (`{}`) is what PDBe returns for entries it no longer
//! serves; [`ResidueListing::is_empty`] reports it.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::identity::StructureId;

/// Authoritative residue listing keyed by lower-case PDB id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResidueListing(BTreeMap<String, ListedEntry>);

/// One PDB entry within a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListedEntry {
    pub molecules: Vec<ListedMolecule>,
}

/// A molecule (entity) of the entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListedMolecule {
    pub chains: Vec<ListedChain>,
}

/// A chain of a molecule, with its residues in PDBe order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListedChain {
    pub residues: Vec<AuthoritativeResidue>,
}

/// A residue as numbered by the deposited structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoritativeResidue {
    pub author_residue_number: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author_insertion_code: String,
    pub residue_name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ResidueListing {
    /// Parse a listing from an API response body.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        Ok(serde_json::from_value(value)?)
    }

    /// A listing holding one molecule with one chain for `id`.
    pub fn single_chain(id: &StructureId, residues: Vec<AuthoritativeResidue>) -> Self {
        Self::from_molecules(
            id,
            vec![ListedMolecule {
                chains: vec![ListedChain { residues }],
            }],
        )
    }

    /// A listing holding the given molecules for `id`.
    pub fn from_molecules(id: &StructureId, molecules: Vec<ListedMolecule>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(id.as_str().to_string(), ListedEntry { molecules });
        Self(entries)
    }

    /// True when the API returned no entries at all (`{}`).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The entry for a structure, if the listing contains it.
    pub fn entry(&self, id: &StructureId) -> Option<&ListedEntry> {
        self.0.get(id.as_str())
    }
}

impl AuthoritativeResidue {
    pub fn new(
        author_residue_number: i64,
        author_insertion_code: impl Into<String>,
        residue_name: impl Into<String>,
    ) -> Self {
        Self {
            author_residue_number,
            author_insertion_code: author_insertion_code.into(),
            residue_name: residue_name.into(),
        }
    }

    /// Number followed by insertion code, as submitters write it (`"12C"`).
    pub fn position_label(&self) -> String {
        format!("{}{}", self.author_residue_number, self.author_insertion_code)
    }
}
