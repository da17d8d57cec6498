//! # funpdbe-cli — FunPDBe Validator Command Line
//!
//! Drives the validation pipeline over submitted files:
//!
//! - `validate`: basic checks, schema conformance, and residue
//!   cross-validation against the PDBe residue listing API
//!
//! Argument parsing lives here and in `main.rs`; the checks themselves are
//! in `funpdbe-schema` and `funpdbe-residue`.

pub mod validate;
