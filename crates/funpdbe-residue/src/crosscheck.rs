//! # Comparison Steps
//!
//! The residue cross-check broken into independent steps. Each step returns
//! a [`CheckOutcome`]; nothing here logs or records. The validator decides
//! what to do with a [`Mismatch`].
//!
//! ```text
//! check_chain_numbering   every submitted residue of a chain, fail-fast
//!   └─ compare_residue    entry → molecules → chains → residues
//!        └─ match_residue_in_list   position label lookup
//!             └─ compare_identity   amino-acid code equality
//! ```

use funpdbe_core::{
    AuthoritativeResidue, Chain, ListedChain, ListedMolecule, ResidueListing, StructureId,
};

/// Result of one comparison step.
pub type CheckOutcome = Result<(), Mismatch>;

/// Why a record, chain or residue failed the cross-check.
///
/// The `Display` text of a diagnosed kind is the diagnostic shown to the
/// submitter. Input-shape kinds carry no diagnostic: basic checks are
/// expected to have rejected such records already.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    /// The record carries no usable PDB id.
    #[error("record has no PDB id")]
    MissingStructureId,

    /// A submitted chain has no `residues` field.
    #[error("chain {chain_label} has no residues list")]
    MissingResidues { chain_label: String },

    /// PDBe returned an empty listing for the chain.
    #[error("No residues in PDB for this entry - probably obsoleted entry")]
    EntryObsoleted,

    /// No authoritative residue carries the submitted position label.
    #[error("residue numbering is completely mismatched between data and PDB entry")]
    NumberingMismatch { position_label: String },

    /// The position exists but holds a different amino acid.
    #[error(
        "residue {position_label} ({submitted}) in data does not match residue {position_label} ({authoritative}) in PDB"
    )]
    IdentityMismatch {
        position_label: String,
        submitted: String,
        authoritative: String,
    },
}

impl Mismatch {
    /// Text to append to the mismatch log, if this kind is diagnosed.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::MissingStructureId | Self::MissingResidues { .. } => None,
            diagnosed => Some(diagnosed.to_string()),
        }
    }
}

/// How much of a residue listing's hierarchy is searched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    /// Only the first molecule and its first chain. Matches the behavior
    /// submitters have historically been validated against.
    #[default]
    Strict,
    /// Every molecule and every chain.
    Exhaustive,
}

impl std::fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

/// Check every submitted residue of `chain`, stopping at the first failure.
pub fn check_chain_numbering(
    listing: &ResidueListing,
    structure_id: &StructureId,
    chain: &Chain,
    mode: TraversalMode,
) -> CheckOutcome {
    let residues = chain
        .residues
        .as_ref()
        .ok_or_else(|| Mismatch::MissingResidues {
            chain_label: chain.chain_label.clone(),
        })?;

    for residue in residues {
        compare_residue(
            listing,
            structure_id,
            &residue.position_label,
            &residue.amino_acid_code,
            mode,
        )?;
    }
    Ok(())
}

/// Locate `position_label` in the listing of `structure_id` and compare its
/// amino acid with `amino_acid_code`.
pub fn compare_residue(
    listing: &ResidueListing,
    structure_id: &StructureId,
    position_label: &str,
    amino_acid_code: &str,
    mode: TraversalMode,
) -> CheckOutcome {
    let entry = listing
        .entry(structure_id)
        .ok_or_else(|| Mismatch::NumberingMismatch {
            position_label: position_label.to_string(),
        })?;
    descend(
        Level::Molecules(&entry.molecules),
        position_label,
        amino_acid_code,
        mode,
    )
}

/// A level of the listing hierarchy below the entry.
enum Level<'a> {
    Molecules(&'a [ListedMolecule]),
    Chains(&'a [ListedChain]),
}

fn descend(
    level: Level<'_>,
    position_label: &str,
    amino_acid_code: &str,
    mode: TraversalMode,
) -> CheckOutcome {
    match level {
        Level::Molecules(molecules) => step(molecules, position_label, mode, |molecule| {
            descend(Level::Chains(&molecule.chains), position_label, amino_acid_code, mode)
        }),
        Level::Chains(chains) => step(chains, position_label, mode, |chain| {
            match_residue_in_list(&chain.residues, position_label, amino_acid_code)
        }),
    }
}

/// Apply `visit` to the items of one level.
///
/// Strict mode visits the first item only. Exhaustive mode visits items in
/// order until one locates the position, i.e. returns anything other than a
/// numbering mismatch. An empty level never locates anything.
fn step<T>(
    items: &[T],
    position_label: &str,
    mode: TraversalMode,
    mut visit: impl FnMut(&T) -> CheckOutcome,
) -> CheckOutcome {
    let not_found = || Mismatch::NumberingMismatch {
        position_label: position_label.to_string(),
    };

    match mode {
        TraversalMode::Strict => items.first().map_or_else(|| Err(not_found()), visit),
        TraversalMode::Exhaustive => {
            for item in items {
                match visit(item) {
                    Err(Mismatch::NumberingMismatch { .. }) => continue,
                    located => return located,
                }
            }
            Err(not_found())
        }
    }
}

/// Find the authoritative residue whose `"{number}{insertion code}"` equals
/// `position_label` exactly, then compare identities.
pub fn match_residue_in_list(
    residues: &[AuthoritativeResidue],
    position_label: &str,
    amino_acid_code: &str,
) -> CheckOutcome {
    match residues.iter().find(|r| r.position_label() == position_label) {
        Some(found) => compare_identity(&found.residue_name, amino_acid_code, position_label),
        None => Err(Mismatch::NumberingMismatch {
            position_label: position_label.to_string(),
        }),
    }
}

/// Compare the authoritative and submitted amino-acid codes at a position.
pub fn compare_identity(
    authoritative_name: &str,
    submitted_code: &str,
    position_label: &str,
) -> CheckOutcome {
    if authoritative_name == submitted_code {
        return Ok(());
    }
    Err(Mismatch::IdentityMismatch {
        position_label: position_label.to_string(),
        submitted: submitted_code.to_string(),
        authoritative: authoritative_name.to_string(),
    })
}

/// Number of sibling molecules/chains strict traversal leaves unvisited.
pub fn skipped_by_strict(listing: &ResidueListing, structure_id: &StructureId) -> usize {
    let Some(entry) = listing.entry(structure_id) else {
        return 0;
    };
    let skipped_molecules = entry.molecules.len().saturating_sub(1);
    let skipped_chains = entry
        .molecules
        .first()
        .map_or(0, |m| m.chains.len().saturating_sub(1));
    skipped_molecules + skipped_chains
}
