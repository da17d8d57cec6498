//! # funpdbe-core — Foundational Types for the FunPDBe Validator
//!
//! Every other crate in the workspace depends on `funpdbe-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype for the structure identifier.** [`StructureId`] validates the
//!    PDB entry code at construction time and stores it lower-cased, which is
//!    the form the PDBe API expects. No bare strings reach the lookup.
//!
//! 2. **Typed submitted records.** [`Record`], [`Chain`] and [`Residue`]
//!    mirror the FunPDBe JSON layout. Required fields are enforced by serde at
//!    parse time; fields whose absence is a validation outcome (the PDB id, a
//!    chain's residue list) are `Option`s so the cross-validator can fail
//!    closed on them explicitly.
//!
//! 3. **Typed residue listings.** [`ResidueListing`] models the PDBe
//!    `residue_listing` response (entry → molecules → chains → residues).
//!    Unknown fields returned by the API are ignored.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `funpdbe-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod listing;
pub mod record;

pub use error::CoreError;
pub use identity::StructureId;
pub use listing::{AuthoritativeResidue, ListedChain, ListedEntry, ListedMolecule, ResidueListing};
pub use record::{Chain, Record, Residue};
