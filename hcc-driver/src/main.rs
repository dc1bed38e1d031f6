//! HoleyC Compiler Driver
//!
//! Command-line front door to the type analysis pass. Reads a resolved
//! program (the output of name resolution) serialized as JSON, type checks
//! it, and prints diagnostics in emission order.

use clap::{Parser, Subcommand, ValueEnum};
use hcc_common::{CompilerError, Diagnostic};
use hcc_frontend::{Frontend, NodeTypeMap, TypeAnalysisReport};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hcc")]
#[command(about = "HoleyC Compiler")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Type check a resolved program
    Check {
        /// Resolved program in JSON form
        input: PathBuf,

        /// Diagnostic output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print the type of every node after a successful check
        #[arg(long)]
        dump_types: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON form of a report
#[derive(Serialize)]
struct JsonReport<'a> {
    succeeded: bool,
    diagnostics: Vec<JsonDiagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node_types: Option<&'a NodeTypeMap>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    line: u32,
    column: u32,
    kind: hcc_common::DiagnosticKind,
    message: &'static str,
}

impl From<&Diagnostic> for JsonDiagnostic {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            line: diagnostic.location.line,
            column: diagnostic.location.column,
            kind: diagnostic.kind,
            message: diagnostic.kind.message(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Check { input, format, dump_types } => {
            match check_file(&input, format, dump_types) {
                Ok(true) => {}
                Ok(false) => {
                    eprintln!("Type check failed");
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error checking {}: {}", input.display(), e);
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Check one file; `Ok(false)` means the program has type errors
fn check_file(
    input_path: &Path,
    format: OutputFormat,
    dump_types: bool,
) -> Result<bool, CompilerError> {
    info!("Checking {}", input_path.display());

    let source = fs::read_to_string(input_path)?;
    let report = Frontend::analyze_json(&source)?;
    debug!(
        "{} node types, {} diagnostic(s)",
        report.node_types.len(),
        report.diagnostics.len()
    );

    print!("{}", render_report(&report, format, dump_types)?);

    if report.succeeded {
        if let Some(violation) = report.violations.first() {
            return Err(violation.clone().into());
        }
    }
    Ok(report.succeeded)
}

/// Render diagnostics, and node types when requested and the check passed
fn render_report(
    report: &TypeAnalysisReport,
    format: OutputFormat,
    dump_types: bool,
) -> Result<String, CompilerError> {
    let show_types = dump_types && report.succeeded;

    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for diagnostic in &report.diagnostics {
                out.push_str(&format!("{}\n", diagnostic));
            }
            if show_types {
                for (node, ty) in report.node_types.iter() {
                    out.push_str(&format!("{}: {}\n", node, ty));
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let json = JsonReport {
                succeeded: report.succeeded,
                diagnostics: report.diagnostics.iter().map(JsonDiagnostic::from).collect(),
                node_types: show_types.then_some(&report.node_types),
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&json)?))
        }
    }
}
