//! # Record Validation
//!
//! Loads a FunPDBe file and its schema, runs the basic checks and JSON
//! Schema validation, and produces the typed record.
//!
//! Every failure is returned as a [`ValidatorError`] and its message is
//! also kept as the validator's error log, so callers that only want to
//! print "why" can read [`RecordValidator::error_log`].

use std::fmt;
use std::path::Path;

use funpdbe_core::{CoreError, Record};
use serde_json::Value;
use thiserror::Error;

use crate::checks::{self, BasicCheckFailure};

/// FunPDBe schema shipped with the repository.
pub const BUNDLED_SCHEMA: &str = include_str!("../../../schemas/funpdbe.schema.json");

/// Error during record validation.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// The file could not be read.
    #[error("File error: {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("JSON error: {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    /// A check ran before any document was loaded.
    #[error("no JSON document loaded")]
    NoDocument,

    /// Schema validation ran before any schema was loaded.
    #[error("no JSON schema loaded")]
    NoSchema,

    /// The schema itself is invalid.
    #[error("invalid JSON schema: {reason}")]
    SchemaBuild { reason: String },

    /// A basic field check failed.
    #[error(transparent)]
    BasicCheck(#[from] BasicCheckFailure),

    /// The document did not conform to the schema.
    #[error("JSON does not comply with schema:\n{0}")]
    SchemaViolation(ValidationViolations),

    /// The document passed the schema but could not be read as a record.
    #[error("record error: {0}")]
    Record(#[from] CoreError),
}

/// One way a submitted file breaks the FunPDBe schema.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Where in the submission, e.g. `/chains/0/residues/3/aa_type`. Empty
    /// for the top-level object.
    pub instance_path: String,
    /// Schema keyword that rejected it, e.g. `/definitions/residue/required`.
    pub schema_path: String,
    /// Message as produced by `jsonschema`.
    pub message: String,
}

impl Violation {
    /// Location shown to submitters.
    pub fn location(&self) -> &str {
        if self.instance_path.is_empty() {
            "top level"
        } else {
            &self.instance_path
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  at {}: {}", self.location(), self.message)
    }
}

/// Every schema violation found in one submission, in `jsonschema` order.
#[derive(Debug, Clone)]
pub struct ValidationViolations(Vec<Violation>);

impl ValidationViolations {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(Violation::to_string).collect();
        f.write_str(&lines.join("\n"))
    }
}

/// Validates FunPDBe files submitted by one data resource.
#[derive(Debug)]
pub struct RecordValidator {
    resource: String,
    schema: Option<Value>,
    json_data: Option<Value>,
    error_log: Option<String>,
}

impl RecordValidator {
    /// Create a validator expecting `data_resource` to equal `resource`.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            schema: None,
            json_data: None,
            error_log: None,
        }
    }

    /// The expected data resource name.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Message of the most recent failure, if any.
    pub fn error_log(&self) -> Option<&str> {
        self.error_log.as_deref()
    }

    /// The loaded document, if any.
    pub fn json_data(&self) -> Option<&Value> {
        self.json_data.as_ref()
    }

    /// Load and parse the document to validate.
    pub fn load_json(&mut self, path: &Path) -> Result<(), ValidatorError> {
        let parsed = self.parse_json(path)?;
        self.json_data = Some(parsed);
        Ok(())
    }

    /// Use an already-parsed document.
    pub fn set_json(&mut self, document: Value) {
        self.json_data = Some(document);
        self.error_log = None;
    }

    /// Load and parse a schema file.
    pub fn load_schema(&mut self, path: &Path) -> Result<(), ValidatorError> {
        let parsed = self.parse_json(path)?;
        self.schema = Some(parsed);
        Ok(())
    }

    /// Use the schema bundled with the repository.
    pub fn load_bundled_schema(&mut self) -> Result<(), ValidatorError> {
        let parsed = serde_json::from_str(BUNDLED_SCHEMA).map_err(|e| ValidatorError::Json {
            path: "schemas/funpdbe.schema.json".into(),
            source: e,
        });
        self.schema = Some(self.logged(parsed)?);
        Ok(())
    }

    fn parse_json(&mut self, path: &Path) -> Result<Value, ValidatorError> {
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| ValidatorError::File {
                path: path.display().to_string(),
                source: e,
            })
            .and_then(|content| {
                serde_json::from_str(&content).map_err(|e| ValidatorError::Json {
                    path: path.display().to_string(),
                    source: e,
                })
            });
        self.logged(parsed)
    }

    /// Check the data resource name and the PDB id format.
    pub fn basic_checks(&mut self) -> Result<(), ValidatorError> {
        let outcome = match &self.json_data {
            None => Err(ValidatorError::NoDocument),
            Some(doc) => checks::check_resource(doc, &self.resource)
                .and_then(|()| checks::check_pdb_id(doc))
                .map_err(ValidatorError::from),
        };
        self.logged(outcome)
    }

    /// Validate the loaded document against the loaded schema.
    pub fn validate_against_schema(&mut self) -> Result<(), ValidatorError> {
        let outcome = self.schema_violations();
        self.logged(outcome)
    }

    fn schema_violations(&self) -> Result<(), ValidatorError> {
        let schema = self.schema.as_ref().ok_or(ValidatorError::NoSchema)?;
        let document = self.json_data.as_ref().ok_or(ValidatorError::NoDocument)?;

        let validator = jsonschema::validator_for(schema).map_err(|e| ValidatorError::SchemaBuild {
            reason: e.to_string(),
        })?;

        let violations: Vec<Violation> = validator
            .iter_errors(document)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = violations.len(), "schema violations");
            Err(ValidatorError::SchemaViolation(ValidationViolations(violations)))
        }
    }

    /// The loaded document as a typed record.
    pub fn record(&mut self) -> Result<Record, ValidatorError> {
        let outcome = match &self.json_data {
            None => Err(ValidatorError::NoDocument),
            Some(doc) => Record::from_value(doc.clone()).map_err(ValidatorError::from),
        };
        self.logged(outcome)
    }

    /// Load `document_path` and run every check, returning the typed record.
    ///
    /// A schema must have been loaded first.
    pub fn validate_file(&mut self, document_path: &Path) -> Result<Record, ValidatorError> {
        self.load_json(document_path)?;
        self.basic_checks()?;
        self.validate_against_schema()?;
        self.record()
    }

    fn logged<T>(&mut self, outcome: Result<T, ValidatorError>) -> Result<T, ValidatorError> {
        if let Err(e) = &outcome {
            self.error_log = Some(e.to_string());
        }
        outcome
    }
}
