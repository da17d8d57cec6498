//! # Error Types
//!
//! Errors raised while constructing core types from untrusted input.

use thiserror::Error;

/// Top-level error type for `funpdbe-core`.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The string is not a well-formed PDB entry identifier.
    #[error("invalid PDB id '{0}': expected a digit 1-9 and three alphanumerics")]
    InvalidStructureId(String),

    /// A submitted record or residue listing could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
