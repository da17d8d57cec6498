//! # funpdbe-schema — Schema & Basic Checks
//!
//! The gate a FunPDBe file passes before residue cross-validation:
//!
//! 1. [`RecordValidator::load_json`] / [`RecordValidator::load_schema`] read
//!    and parse the files.
//! 2. [`RecordValidator::basic_checks`] confirms the submitting resource and
//!    the PDB id format.
//! 3. [`RecordValidator::validate_against_schema`] runs the `jsonschema`
//!    validator and reports every violation.
//! 4. [`RecordValidator::record`] hands the typed [`funpdbe_core::Record`]
//!    to the residue cross-validator.
//!
//! The message of the most recent failure is kept in
//! [`RecordValidator::error_log`] for display.
//!
//! ## Bundled Schema
//!
//! [`BUNDLED_SCHEMA`] is the FunPDBe schema shipped in `schemas/` at the
//! repository root, used when no schema path is given.

pub mod checks;
pub mod validate;

pub use checks::BasicCheckFailure;
pub use validate::{
    RecordValidator, ValidationViolations, ValidatorError, Violation, BUNDLED_SCHEMA,
};
