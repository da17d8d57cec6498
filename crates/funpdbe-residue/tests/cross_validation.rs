//! End-to-end residue cross-validation against an in-memory lookup.
//!
//! Exercises ordering and fail-fast behavior across chains, the obsoleted
//! entry path, transport faults, and the two traversal modes.

use funpdbe_core::{
    AuthoritativeResidue, ListedChain, ListedMolecule, Record, ResidueListing, StructureId,
};
use funpdbe_lookup::{InMemoryStructureLookup, LookupError, LookupRequest};
use funpdbe_residue::{ResidueIndexValidator, TraversalMode};
use serde_json::json;

fn pdb(raw: &str) -> StructureId {
    StructureId::new(raw).unwrap()
}

fn chain_listing(id: &StructureId, residues: &[(i64, &str, &str)]) -> ResidueListing {
    ResidueListing::single_chain(
        id,
        residues
            .iter()
            .map(|(n, code, name)| AuthoritativeResidue::new(*n, *code, *name))
            .collect(),
    )
}

fn two_chain_record(first_label: &str) -> Record {
    Record::from_value(json!({
        "data_resource": "FoldX",
        "pdb_id": "1CBS",
        "chains": [
            { "chain_label": "A", "residues": [ { "pdb_res_label": first_label, "aa_type": "PRO" } ] },
            { "chain_label": "B", "residues": [ { "pdb_res_label": "1", "aa_type": "PRO" } ] }
        ]
    }))
    .unwrap()
}

#[tokio::test]
async fn all_chains_pass() {
    let id = pdb("1cbs");
    let lookup = InMemoryStructureLookup::new()
        .with_listing(&id, "A", chain_listing(&id, &[(1, "", "PRO"), (2, "", "ASN")]))
        .with_listing(&id, "B", chain_listing(&id, &[(1, "", "PRO")]));
    let record = two_chain_record("1");

    let mut validator = ResidueIndexValidator::new(&record, &lookup);
    assert!(validator.validate_all().await.unwrap());
    assert!(validator.mismatches().is_empty());
    assert_eq!(
        lookup.requests(),
        vec![LookupRequest::new("1cbs", "A"), LookupRequest::new("1cbs", "B")]
    );
}

#[tokio::test]
async fn first_failing_chain_stops_the_run() {
    let id = pdb("1cbs");
    let lookup = InMemoryStructureLookup::new()
        .with_listing(&id, "A", chain_listing(&id, &[(2, "", "PRO")]))
        .with_listing(&id, "B", chain_listing(&id, &[(1, "", "PRO")]));
    let record = two_chain_record("1");

    let mut validator = ResidueIndexValidator::new(&record, &lookup);
    assert!(!validator.validate_all().await.unwrap());
    assert_eq!(lookup.requests(), vec![LookupRequest::new("1cbs", "A")]);
    assert_eq!(
        validator.mismatches().entries(),
        ["residue numbering is completely mismatched between data and PDB entry"]
    );
}

#[tokio::test]
async fn empty_listing_reports_obsoleted_entry_once() {
    let record = two_chain_record("1");
    let lookup = InMemoryStructureLookup::new();

    let mut validator = ResidueIndexValidator::new(&record, &lookup);
    assert!(!validator.validate_all().await.unwrap());
    assert_eq!(validator.mismatches().len(), 1);
    assert_eq!(
        validator.mismatches().entries()[0],
        "No residues in PDB for this entry - probably obsoleted entry"
    );
    assert_eq!(lookup.requests().len(), 1);
}

#[tokio::test]
async fn identity_mismatch_names_position_and_codes() {
    let id = pdb("1cbs");
    let record = Record::from_value(json!({
        "pdb_id": "1cbs",
        "chains": [ { "chain_label": "A", "residues": [
            { "pdb_res_label": "1", "aa_type": "PRO" },
            { "pdb_res_label": "2C", "aa_type": "HIS" }
        ] } ]
    }))
    .unwrap();
    let lookup = InMemoryStructureLookup::new()
        .with_listing(&id, "A", chain_listing(&id, &[(1, "", "PRO"), (2, "C", "ALA")]));

    let mut validator = ResidueIndexValidator::new(&record, &lookup);
    assert!(!validator.validate_all().await.unwrap());
    assert_eq!(
        validator.into_mismatches().into_inner(),
        vec!["residue 2C (HIS) in data does not match residue 2C (ALA) in PDB".to_string()]
    );
}

#[tokio::test]
async fn chain_missing_residues_fails_silently() {
    let id = pdb("1cbs");
    let record = Record::from_value(json!({
        "pdb_id": "1cbs",
        "chains": [ { "chain_label": "A" } ]
    }))
    .unwrap();
    let lookup = InMemoryStructureLookup::new()
        .with_listing(&id, "A", chain_listing(&id, &[(1, "", "PRO")]));

    let mut validator = ResidueIndexValidator::new(&record, &lookup);
    assert!(!validator.validate_all().await.unwrap());
    assert!(validator.mismatches().is_empty());
}

#[tokio::test]
async fn record_without_chains_passes_vacuously() {
    let record = Record::from_value(json!({ "pdb_id": "1cbs", "chains": [] })).unwrap();
    let lookup = InMemoryStructureLookup::new();

    let mut validator = ResidueIndexValidator::new(&record, &lookup);
    assert!(validator.validate_all().await.unwrap());
    assert!(lookup.requests().is_empty());
}

#[tokio::test]
async fn transport_fault_propagates_and_keeps_earlier_diagnostics() {
    let id = pdb("1cbs");
    let lookup = InMemoryStructureLookup::new().with_failure(&id, "A", "connection refused");
    let record = two_chain_record("1");

    let mut validator = ResidueIndexValidator::new(&record, &lookup);
    let err = validator.validate_all().await.unwrap_err();
    assert!(matches!(err, LookupError::Unavailable { .. }));
    assert!(validator.mismatches().is_empty());
    assert_eq!(lookup.requests().len(), 1);
}

#[tokio::test]
async fn exhaustive_mode_searches_every_molecule() {
    let id = pdb("1cbs");
    let listing = ResidueListing::from_molecules(
        &id,
        vec![
            ListedMolecule {
                chains: vec![ListedChain {
                    residues: vec![AuthoritativeResidue::new(1, "", "PRO")],
                }],
            },
            ListedMolecule {
                chains: vec![ListedChain {
                    residues: vec![AuthoritativeResidue::new(200, "", "RET")],
                }],
            },
        ],
    );
    let record = Record::from_value(json!({
        "pdb_id": "1cbs",
        "chains": [ { "chain_label": "A", "residues": [ { "pdb_res_label": "200", "aa_type": "RET" } ] } ]
    }))
    .unwrap();
    let lookup = InMemoryStructureLookup::new().with_listing(&id, "A", listing);

    let mut strict = ResidueIndexValidator::new(&record, &lookup);
    assert!(!strict.validate_all().await.unwrap());
    assert_eq!(strict.mismatches().len(), 1);

    let mut exhaustive =
        ResidueIndexValidator::with_mode(&record, &lookup, TraversalMode::Exhaustive);
    assert!(exhaustive.validate_all().await.unwrap());
    assert!(exhaustive.mismatches().is_empty());
}
