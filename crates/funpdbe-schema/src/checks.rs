//! Field checks that run before schema validation.

use funpdbe_core::StructureId;
use serde_json::Value;
use thiserror::Error;

/// A failed basic check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BasicCheckFailure {
    #[error("No data resource name found")]
    MissingResource,

    #[error("Data resource name mismatch")]
    ResourceMismatch { expected: String, found: String },

    #[error("No PDB id found")]
    MissingPdbId,

    #[error("Invalid PDB id found")]
    InvalidPdbId(String),
}

/// `data_resource` must be present and equal to `expected`.
pub fn check_resource(document: &Value, expected: &str) -> Result<(), BasicCheckFailure> {
    let found = match document.get("data_resource") {
        None => return Err(BasicCheckFailure::MissingResource),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    if found != expected {
        return Err(BasicCheckFailure::ResourceMismatch {
            expected: expected.to_string(),
            found,
        });
    }
    Ok(())
}

/// `pdb_id` must be present and a well-formed PDB entry code.
pub fn check_pdb_id(document: &Value) -> Result<(), BasicCheckFailure> {
    match document.get("pdb_id") {
        None => Err(BasicCheckFailure::MissingPdbId),
        Some(Value::String(s)) if StructureId::is_well_formed(s) => Ok(()),
        Some(other) => Err(BasicCheckFailure::InvalidPdbId(
            other.as_str().map_or_else(|| other.to_string(), str::to_string),
        )),
    }
}
