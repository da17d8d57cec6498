//! # Submitted Records
//!
//! Typed view of a FunPDBe annotation file as submitted by a data resource.
//!
//! ```json
//! {
//!   "data_resource": "FoldX",
//!   "pdb_id": "1cbs",
//!   "chains": [
//!     { "chain_label": "A",
//!       "residues": [ { "pdb_res_label": "12C", "aa_type": "ALA" } ] }
//!   ]
//! }
//! ```
//!
//! Fields the residue cross-check does not read (`resource_version`,
//! `sites`, per-residue `site_data`, ...) are either kept untyped in
//! [`Record::extra`] or ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::identity::StructureId;

/// Top-level submitted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Name of the submitting resource, checked against the expected name.
    #[serde(rename = "data_resource", default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,

    /// PDB entry code as written by the submitter (not yet validated).
    #[serde(rename = "pdb_id", default, skip_serializing_if = "Option::is_none")]
    pub structure_id: Option<String>,

    /// Chains in submitted order.
    #[serde(default)]
    pub chains: Vec<Chain>,

    /// Remaining top-level fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A labeled chain and its annotated residues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    pub chain_label: String,

    /// `None` when the submitter omitted the `residues` field entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residues: Option<Vec<Residue>>,
}

/// One submitted residue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Residue {
    /// Author residue number with optional insertion code, e.g. `"12C"`.
    #[serde(rename = "pdb_res_label")]
    pub position_label: String,

    /// Three-letter amino-acid code, e.g. `"ALA"`.
    #[serde(rename = "aa_type")]
    pub amino_acid_code: String,
}

impl Record {
    /// Parse a record from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Convert an already-parsed JSON document into a record.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        Ok(serde_json::from_value(value)?)
    }

    /// The validated, lower-cased structure identifier, if the record
    /// carries a well-formed one.
    pub fn structure_id(&self) -> Option<StructureId> {
        self.structure_id
            .as_deref()
            .and_then(|raw| StructureId::new(raw).ok())
    }
}

impl Chain {
    /// Build a chain with a residue list.
    pub fn new(chain_label: impl Into<String>, residues: Vec<Residue>) -> Self {
        Self {
            chain_label: chain_label.into(),
            residues: Some(residues),
        }
    }
}

impl Residue {
    pub fn new(position_label: impl Into<String>, amino_acid_code: impl Into<String>) -> Self {
        Self {
            position_label: position_label.into(),
            amino_acid_code: amino_acid_code.into(),
        }
    }
}
