//! # funpdbe-residue — Residue Index Cross-Validation
//!
//! Every residue of a FunPDBe record names a position (`pdb_res_label`, an
//! author residue number with optional insertion code) and an amino acid
//! (`aa_type`). Both must agree with the deposited structure. This crate
//! fetches the PDBe residue listing of each submitted chain and compares.
//!
//! ## Usage
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use funpdbe_core::Record;
//! use funpdbe_lookup::{HttpStructureLookup, LookupConfig};
//! use funpdbe_residue::ResidueIndexValidator;
//!
//! let record = Record::from_json_str(&std::fs::read_to_string("1cbs.json")?)?;
//! let lookup = HttpStructureLookup::new(LookupConfig::pdbe()?)?;
//! let mut validator = ResidueIndexValidator::new(&record, &lookup);
//! if !validator.validate_all().await? {
//!     for line in validator.mismatches() {
//!         println!("{line}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Traversal
//!
//! A listing nests molecules → chains → residues. [`TraversalMode::Strict`]
//! (the default) only searches the first molecule's first chain, which is
//! what records have historically been validated against even though an
//! entry may hold several. [`TraversalMode::Exhaustive`] searches them all.

pub mod crosscheck;
pub mod log;
pub mod validator;

pub use crosscheck::{CheckOutcome, Mismatch, TraversalMode};
pub use log::MismatchLog;
pub use validator::ResidueIndexValidator;
