//! # Residue Index Validator
//!
//! Drives the comparison steps of [`crate::crosscheck`] over a whole record,
//! one chain at a time, and owns the session's [`MismatchLog`].
//!
//! ## Fail-fast
//!
//! Chains are checked in submitted order and the first failing chain ends
//! the run; later chains are never looked up. Within a chain the first
//! failing residue ends the chain. Callers must not assume every chain or
//! residue was examined.
//!
//! ## Faults
//!
//! Lookup failures are not validation outcomes. They abort the run with
//! `Err`; diagnostics recorded before the fault remain in the log.

use funpdbe_core::{Chain, Record, ResidueListing, StructureId};
use funpdbe_lookup::{LookupError, StructureLookup};

use crate::crosscheck::{self, CheckOutcome, Mismatch, TraversalMode};
use crate::log::MismatchLog;

/// Cross-validates the residues of one submitted record against PDBe.
#[derive(Debug)]
pub struct ResidueIndexValidator<'a, L> {
    record: &'a Record,
    lookup: &'a L,
    structure_id: Option<StructureId>,
    mode: TraversalMode,
    mismatches: MismatchLog,
}

impl<'a, L: StructureLookup> ResidueIndexValidator<'a, L> {
    /// Create a validator in [`TraversalMode::Strict`].
    ///
    /// A record without a well-formed PDB id yields a validator whose every
    /// check fails closed.
    pub fn new(record: &'a Record, lookup: &'a L) -> Self {
        Self::with_mode(record, lookup, TraversalMode::default())
    }

    /// Create a validator with an explicit traversal mode.
    pub fn with_mode(record: &'a Record, lookup: &'a L, mode: TraversalMode) -> Self {
        Self {
            record,
            lookup,
            structure_id: record.structure_id(),
            mode,
            mismatches: MismatchLog::new(),
        }
    }

    /// The lower-cased PDB id, or `None` if the record has none.
    pub fn structure_id(&self) -> Option<&StructureId> {
        self.structure_id.as_ref()
    }

    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    /// Diagnostics recorded so far.
    pub fn mismatches(&self) -> &MismatchLog {
        &self.mismatches
    }

    pub fn into_mismatches(self) -> MismatchLog {
        self.mismatches
    }

    /// Check every chain of the record, stopping at the first failure.
    pub async fn validate_all(&mut self) -> Result<bool, LookupError> {
        let Some(structure_id) = self.structure_id.clone() else {
            tracing::debug!("record has no PDB id, skipping residue check");
            return Ok(false);
        };

        let record = self.record;
        for chain in &record.chains {
            if !self.fetch_and_check_chain(chain).await? {
                tracing::info!(
                    pdb_id = %structure_id,
                    chain = %chain.chain_label,
                    "residue check failed"
                );
                return Ok(false);
            }
        }

        tracing::info!(
            pdb_id = %structure_id,
            chains = record.chains.len(),
            "residue check passed"
        );
        Ok(true)
    }

    /// Fetch the listing of one chain and check its residues against it.
    pub async fn fetch_and_check_chain(&mut self, chain: &Chain) -> Result<bool, LookupError> {
        let Some(structure_id) = self.structure_id.clone() else {
            return Ok(self.settle(Err(Mismatch::MissingStructureId)));
        };

        tracing::debug!(
            pdb_id = %structure_id,
            chain = %chain.chain_label,
            lookup = self.lookup.lookup_name(),
            "fetching residue listing"
        );
        let listing = self
            .lookup
            .residue_listing(&structure_id, &chain.chain_label)
            .await?;

        if listing.is_empty() {
            tracing::warn!(
                pdb_id = %structure_id,
                "empty residue listing, entry probably obsoleted"
            );
            return Ok(self.settle(Err(Mismatch::EntryObsoleted)));
        }

        if self.mode == TraversalMode::Strict {
            let skipped = crosscheck::skipped_by_strict(&listing, &structure_id);
            if skipped > 0 {
                tracing::warn!(
                    pdb_id = %structure_id,
                    chain = %chain.chain_label,
                    skipped,
                    "strict traversal ignores all but the first molecule and chain of the listing"
                );
            }
        }

        Ok(self.check_chain_numbering(&listing, chain))
    }

    /// Check the residues of `chain` against an already fetched listing.
    pub fn check_chain_numbering(&mut self, listing: &ResidueListing, chain: &Chain) -> bool {
        let outcome = match &self.structure_id {
            Some(id) => crosscheck::check_chain_numbering(listing, id, chain, self.mode),
            None => Err(Mismatch::MissingStructureId),
        };
        self.settle(outcome)
    }

    /// Check a single submitted residue against an already fetched listing.
    pub fn compare_residue(
        &mut self,
        position_label: &str,
        amino_acid_code: &str,
        listing: &ResidueListing,
    ) -> bool {
        let outcome = match &self.structure_id {
            Some(id) => crosscheck::compare_residue(
                listing,
                id,
                position_label,
                amino_acid_code,
                self.mode,
            ),
            None => Err(Mismatch::MissingStructureId),
        };
        self.settle(outcome)
    }

    fn settle(&mut self, outcome: CheckOutcome) -> bool {
        match outcome {
            Ok(()) => true,
            Err(mismatch) => {
                if self.mismatches.record(&mismatch) {
                    tracing::debug!(%mismatch, "recorded mismatch");
                }
                false
            }
        }
    }
}
