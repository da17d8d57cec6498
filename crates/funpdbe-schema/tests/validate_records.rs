//! File-based validation with the bundled schema.

use std::io::Write;

use funpdbe_schema::{BasicCheckFailure, RecordValidator, ValidatorError};
use serde_json::json;
use tempfile::NamedTempFile;

fn write_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn submission(resource: &str, pdb_id: &str) -> String {
    json!({
        "data_resource": resource,
        "resource_version": "2.1",
        "software_version": "2.1",
        "resource_entry_url": "https://example.org/entry/1cbs",
        "release_date": "01/02/2023",
        "pdb_id": pdb_id,
        "chains": [{
            "chain_label": "A",
            "residues": [
                {
                    "pdb_res_label": "1",
                    "aa_type": "PRO",
                    "site_data": [{ "site_id_ref": 1, "raw_score": 1.2, "confidence_classification": "medium" }]
                },
                {
                    "pdb_res_label": "2A",
                    "aa_type": "ASN",
                    "site_data": [{ "site_id_ref": 1, "raw_score": "0.3", "confidence_classification": "low" }]
                }
            ]
        }],
        "sites": [{ "site_id": 1, "label": "ligand binding" }],
        "evidence_code_ontology": [{ "eco_term": "computational evidence", "eco_code": "ECO_0000203" }]
    })
    .to_string()
}

fn validator() -> RecordValidator {
    let mut validator = RecordValidator::new("3DLigandSite");
    validator.load_bundled_schema().unwrap();
    validator
}

#[test]
fn valid_file_yields_record() {
    let file = write_json(&submission("3DLigandSite", "1CBS"));
    let mut validator = validator();
    let record = validator.validate_file(file.path()).unwrap();
    assert_eq!(record.structure_id().unwrap().as_str(), "1cbs");
    assert_eq!(record.chains.len(), 1);
    assert!(validator.error_log().is_none());
}

#[test]
fn missing_file_is_a_file_error() {
    let mut validator = validator();
    let err = validator
        .load_json(std::path::Path::new("/nonexistent/funpdbe/1cbs.json"))
        .unwrap_err();
    assert!(matches!(err, ValidatorError::File { .. }));
    assert!(validator.error_log().unwrap().starts_with("File error"));
}

#[test]
fn malformed_json_is_a_json_error() {
    let file = write_json("{ \"pdb_id\": ");
    let mut validator = validator();
    let err = validator.load_json(file.path()).unwrap_err();
    assert!(matches!(err, ValidatorError::Json { .. }));
    assert!(validator.error_log().unwrap().starts_with("JSON error"));
}

#[test]
fn wrong_resource_stops_before_schema() {
    let file = write_json(&submission("ProKinO", "1cbs"));
    let mut validator = validator();
    let err = validator.validate_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ValidatorError::BasicCheck(BasicCheckFailure::ResourceMismatch { .. })
    ));
    assert_eq!(validator.error_log(), Some("Data resource name mismatch"));
}

#[test]
fn invalid_pdb_id_is_rejected() {
    let file = write_json(&submission("3DLigandSite", "abcd"));
    let mut validator = validator();
    validator.validate_file(file.path()).unwrap_err();
    assert_eq!(validator.error_log(), Some("Invalid PDB id found"));
}

#[test]
fn schema_can_be_loaded_from_disk() {
    let schema = write_json(
        &json!({
            "type": "object",
            "required": ["pdb_id", "chains"],
            "properties": { "chains": { "type": "array" } }
        })
        .to_string(),
    );
    let document =
        write_json(&json!({ "data_resource": "3DLigandSite", "pdb_id": "1cbs" }).to_string());

    let mut validator = RecordValidator::new("3DLigandSite");
    validator.load_schema(schema.path()).unwrap();
    validator.load_json(document.path()).unwrap();
    validator.basic_checks().unwrap();
    let err = validator.validate_against_schema().unwrap_err();
    assert!(matches!(err, ValidatorError::SchemaViolation(ref v) if v.len() == 1));
}
