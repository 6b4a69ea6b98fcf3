//! fieldptr — command-line front end.
//!
//! Resolves validation namespaces against a TOML schema document and turns
//! recorded engine failures into pointer-addressed reports.
//!
//! Usage:
//!   cargo run -p demo -- resolve --schema user.toml Profile.Zip 'Addresses[2].Zip'
//!   cargo run -p demo -- report --schema user.toml --failures failures.json
//!   cargo run -p demo -- sample --json

mod sample;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fieldptr_contracts::{error::FieldPtrResult, FailureRecord, FieldPtrError, ValidationReport};
use fieldptr_core::{FnEngine, ValidationReportBuilder};
use fieldptr_schema::{CompiledSchema, SchemaDocument};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Translate validation failure namespaces into JSON Pointers.
#[derive(Parser)]
#[command(
    name = "fieldptr",
    about = "Translate validation failure namespaces into JSON Pointers",
    long_about = "Resolves dotted, indexed field namespaces reported by a validation engine\n\
                  into RFC 6901 JSON Pointers, using a TOML schema document."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the pointer for each namespace, one per line.
    Resolve {
        /// TOML schema document.
        #[arg(long)]
        schema: PathBuf,
        /// Namespaces such as `Profile.Addresses[2].Zip`.
        #[arg(required = true)]
        namespaces: Vec<String>,
    },
    /// Build a report from a JSON array of recorded failures.
    Report {
        /// TOML schema document.
        #[arg(long)]
        schema: PathBuf,
        /// JSON file holding an array of failure records.
        #[arg(long)]
        failures: PathBuf,
        /// Print the structured error body instead of the combined message.
        #[arg(long)]
        json: bool,
    },
    /// Validate the built-in sample order and print its report.
    Sample {
        /// Print the structured error body instead of the combined message.
        #[arg(long)]
        json: bool,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Resolve { schema, namespaces } => run_resolve(&schema, &namespaces),
        Command::Report {
            schema,
            failures,
            json,
        } => run_report(&schema, &failures, json),
        Command::Sample { json } => run_sample(json),
    };

    ExitCode::from(exit_status(&result))
}

/// 0 on success, 1 when the report holds violations, 2 when the schema,
/// the failures, or the report output could not be handled.
fn exit_status(result: &FieldPtrResult<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(FieldPtrError::Invalid(report)) => {
            info!(violations = report.len(), "validation failed");
            1
        }
        Err(e) => {
            eprintln!("fieldptr error: {}", e);
            2
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn load_schema(path: &Path) -> FieldPtrResult<CompiledSchema> {
    let compiled = SchemaDocument::from_file(path)?.compile()?;
    debug!(schema = %path.display(), "schema loaded");
    Ok(compiled)
}

fn run_resolve(schema: &Path, namespaces: &[String]) -> FieldPtrResult<()> {
    let compiled = load_schema(schema)?;
    let resolver = compiled.resolver();
    for namespace in namespaces {
        println!("{}", resolver.resolve(&compiled.schema, namespace));
    }
    Ok(())
}

fn run_report(schema: &Path, failures: &Path, json: bool) -> FieldPtrResult<()> {
    let compiled = load_schema(schema)?;
    let recorded = read_failures(failures)?;

    // The recorded failures stand in for a live engine run.
    let engine = FnEngine::new(|records: &Vec<FailureRecord>| -> FieldPtrResult<Vec<FailureRecord>> {
        Ok(records.clone())
    });
    let builder = ValidationReportBuilder::new(engine).with_resolver(compiled.resolver());
    let report = builder.build(&recorded, &compiled.schema)?;

    print_report(&report, json)?;
    report.into_result()
}

fn run_sample(json: bool) -> FieldPtrResult<()> {
    let order = sample::sample_order();
    let report = sample::builder().build_described(&order)?;

    print_report(&report, json)?;
    report.into_result()
}

fn read_failures(path: &Path) -> FieldPtrResult<Vec<FailureRecord>> {
    let contents = std::fs::read_to_string(path).map_err(|e| FieldPtrError::EngineFailed {
        reason: format!("failed to read failures file '{}': {}", path.display(), e),
    })?;
    serde_json::from_str(&contents).map_err(|e| FieldPtrError::EngineFailed {
        reason: format!("failures file '{}' is not a failure array: {}", path.display(), e),
    })
}

fn print_report(report: &ValidationReport, json: bool) -> FieldPtrResult<()> {
    write_report(&mut std::io::stdout().lock(), report, json)
}

/// The `to_json()` body when `json` is set, otherwise the combined message
/// (empty for a valid report).
fn write_report(out: &mut impl Write, report: &ValidationReport, json: bool) -> FieldPtrResult<()> {
    let written = if json {
        serde_json::to_writer_pretty(&mut *out, &report.to_json())
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(out))
    } else {
        write!(out, "{report}")
    };
    written.map_err(|e| FieldPtrError::EngineFailed {
        reason: format!("failed to write report: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_TOML: &str = include_str!("../data/user.toml");
    const FAILURES_JSON: &str = include_str!("../data/failures.json");

    #[test]
    fn bundled_failures_resolve_against_bundled_schema() {
        let compiled = SchemaDocument::from_toml_str(USER_TOML)
            .unwrap()
            .compile()
            .unwrap();
        let recorded: Vec<FailureRecord> = serde_json::from_str(FAILURES_JSON).unwrap();

        let engine = FnEngine::new(|records: &Vec<FailureRecord>| -> FieldPtrResult<Vec<FailureRecord>> {
            Ok(records.clone())
        });
        let report = ValidationReportBuilder::new(engine)
            .with_resolver(compiled.resolver())
            .build(&recorded, &compiled.schema)
            .unwrap();

        let pointers: Vec<_> = report.iter().map(|e| e.pointer.as_str()).collect();
        assert_eq!(
            pointers,
            vec![
                "/name",
                "/profile/zip_code",
                "/addresses[2]/zip_code",
                "/",
                "/tags[0]",
                "/Legacy.Field",
            ]
        );
        assert!(report
            .message()
            .contains("Error at '/addresses[2]/zip_code': zip code must be numeric\n"));
    }

    fn invalid_report() -> ValidationReport {
        let mut report = ValidationReport::new();
        report.push(
            fieldptr_contracts::JsonPointer::from_segments(["profile", "zip_code"]),
            FailureRecord::new("Profile.Zip", "len").with_param("5"),
        );
        report
    }

    #[test]
    fn exit_status_maps_outcomes() {
        assert_eq!(exit_status(&Ok(())), 0);
        assert_eq!(exit_status(&invalid_report().into_result()), 1);
        assert_eq!(
            exit_status(&Err(FieldPtrError::ConfigError {
                reason: "root type 'Ghost' is not declared".to_string(),
            })),
            2
        );
        assert_eq!(
            exit_status(&Err(FieldPtrError::EngineFailed {
                reason: "failed to read failures file".to_string(),
            })),
            2
        );
    }

    #[test]
    fn unloadable_schema_exits_with_two() {
        let result = run_resolve(Path::new("/nonexistent/schema.toml"), &["Name".to_string()]);
        assert!(matches!(result, Err(FieldPtrError::ConfigError { .. })));
        assert_eq!(exit_status(&result), 2);
    }

    #[test]
    fn sample_run_exits_with_one() {
        assert_eq!(exit_status(&run_sample(false)), 1);
    }

    #[test]
    fn json_output_is_the_structured_body() {
        let report = invalid_report();
        let mut out = Vec::new();
        write_report(&mut out, &report, true).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, report.to_json());
        assert_eq!(parsed["errors"][0]["pointer"], "/profile/zip_code");
    }

    #[test]
    fn text_output_is_the_combined_message() {
        let report = invalid_report();
        let mut out = Vec::new();
        write_report(&mut out, &report, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), report.message());

        let mut out = Vec::new();
        write_report(&mut out, &ValidationReport::new(), false).unwrap();
        assert!(out.is_empty(), "a valid report prints nothing");
    }

    #[test]
    fn missing_failures_file_is_an_engine_error() {
        let err = read_failures(Path::new("/nonexistent/failures.json")).unwrap_err();
        assert!(matches!(err, FieldPtrError::EngineFailed { .. }));
    }
}
