//! # Validate Subcommand
//!
//! Runs every submitted file through load, basic checks, schema validation,
//! and residue cross-validation, printing a `PASS`/`FAIL` line per file.
//!
//! Exit codes: 0 when every file passes, 1 on any validation failure. An
//! operational fault (unreadable schema, lookup transport failure) is
//! returned as an error and mapped to 2 by `main`.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use funpdbe_lookup::{HttpStructureLookup, LookupConfig, StructureLookup};
use funpdbe_residue::{ResidueIndexValidator, TraversalMode};
use funpdbe_schema::RecordValidator;

/// How far residue lookups search the listing hierarchy.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraversalArg {
    /// Only the first molecule and first chain of each listing.
    #[default]
    Strict,
    /// Every molecule and chain, in order.
    Exhaustive,
}

impl From<TraversalArg> for TraversalMode {
    fn from(arg: TraversalArg) -> Self {
        match arg {
            TraversalArg::Strict => TraversalMode::Strict,
            TraversalArg::Exhaustive => TraversalMode::Exhaustive,
        }
    }
}

/// Arguments for the `funpdbe validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Expected `data_resource` of every file.
    #[arg(long, value_name = "NAME")]
    pub resource: String,

    /// JSON schema to validate against. Defaults to the bundled FunPDBe schema.
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Base URL of the residue listing API. Overrides FUNPDBE_API_URL.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Residue lookup traversal.
    #[arg(long, value_enum, default_value_t = TraversalArg::Strict)]
    pub traversal: TraversalArg,

    /// Stop after schema validation; make no PDBe lookups.
    #[arg(long)]
    pub skip_residues: bool,

    /// FunPDBe JSON files to validate.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

/// Execute the validate subcommand against the PDBe API.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let config = match &args.api_url {
        Some(url) => LookupConfig::new(url),
        None => LookupConfig::from_env(),
    }
    .context("invalid lookup configuration")?;
    tracing::debug!(base_url = %config.base_url, "lookup configured");

    let lookup = HttpStructureLookup::new(config).context("failed to build lookup client")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runtime.block_on(validate_files(args, &lookup, &mut out))
}

/// Validate every file in `args.files` using `lookup`, writing the report to `out`.
pub async fn validate_files<L: StructureLookup>(
    args: &ValidateArgs,
    lookup: &L,
    out: &mut dyn Write,
) -> Result<u8> {
    let mut validator = RecordValidator::new(&args.resource);
    match &args.schema {
        Some(path) => validator
            .load_schema(path)
            .with_context(|| format!("failed to load schema {}", path.display()))?,
        None => validator
            .load_bundled_schema()
            .context("failed to load bundled schema")?,
    }

    let mut failed = 0usize;
    for path in &args.files {
        let diagnostics = validate_one(&mut validator, args, lookup, path).await?;
        if diagnostics.is_empty() {
            writeln!(out, "PASS: {}", path.display())?;
        } else {
            failed += 1;
            writeln!(out, "FAIL: {}", path.display())?;
            for line in &diagnostics {
                writeln!(out, "  {line}")?;
            }
        }
    }

    tracing::info!(total = args.files.len(), failed, "validation finished");
    Ok(if failed == 0 { 0 } else { 1 })
}

/// Diagnostics for one file; empty means the file passed.
///
/// A file that fails residue cross-validation without a diagnostic (missing
/// PDB id or residues) still yields one generic line so it is never
/// reported as passing.
async fn validate_one<L: StructureLookup>(
    validator: &mut RecordValidator,
    args: &ValidateArgs,
    lookup: &L,
    path: &Path,
) -> Result<Vec<String>> {
    let record = match validator.validate_file(path) {
        Ok(record) => record,
        Err(e) => return Ok(vec![e.to_string()]),
    };
    if args.skip_residues {
        return Ok(Vec::new());
    }

    let mut residues = ResidueIndexValidator::with_mode(&record, lookup, args.traversal.into());
    let passed = residues
        .validate_all()
        .await
        .with_context(|| format!("residue lookup failed for {}", path.display()))?;
    if passed {
        return Ok(Vec::new());
    }

    let diagnostics = residues.into_mismatches().into_inner();
    if diagnostics.is_empty() {
        Ok(vec!["residue cross-validation failed".to_string()])
    } else {
        Ok(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        args: ValidateArgs,
    }

    #[test]
    fn defaults() {
        let cli = TestCli::try_parse_from(["funpdbe", "--resource", "FoldX", "1cbs.json"]).unwrap();
        assert_eq!(cli.args.resource, "FoldX");
        assert_eq!(cli.args.traversal, TraversalArg::Strict);
        assert!(cli.args.schema.is_none());
        assert!(cli.args.api_url.is_none());
        assert!(!cli.args.skip_residues);
        assert_eq!(cli.args.files, vec![PathBuf::from("1cbs.json")]);
    }

    #[test]
    fn all_flags() {
        let cli = TestCli::try_parse_from([
            "funpdbe",
            "--resource",
            "FoldX",
            "--schema",
            "schema.json",
            "--api-url",
            "http://localhost:8080/listing",
            "--traversal",
            "exhaustive",
            "--skip-residues",
            "a.json",
            "b.json",
        ])
        .unwrap();
        assert_eq!(cli.args.traversal, TraversalArg::Exhaustive);
        assert_eq!(cli.args.schema, Some(PathBuf::from("schema.json")));
        assert!(cli.args.skip_residues);
        assert_eq!(cli.args.files.len(), 2);
    }

    #[test]
    fn files_and_resource_are_required() {
        assert!(TestCli::try_parse_from(["funpdbe", "--resource", "FoldX"]).is_err());
        assert!(TestCli::try_parse_from(["funpdbe", "1cbs.json"]).is_err());
    }

    #[test]
    fn traversal_maps_to_mode() {
        assert_eq!(TraversalMode::from(TraversalArg::Strict), TraversalMode::Strict);
        assert_eq!(TraversalMode::from(TraversalArg::Exhaustive), TraversalMode::Exhaustive);
    }

    #[test]
    fn bad_api_url_is_an_operational_error() {
        let args = ValidateArgs {
            resource: "FoldX".into(),
            schema: None,
            api_url: Some("not a url".into()),
            traversal: TraversalArg::Strict,
            skip_residues: false,
            files: vec![PathBuf::from("1cbs.json")],
        };
        let err = run_validate(&args).unwrap_err();
        assert!(err.to_string().contains("invalid lookup configuration"));
    }
}
