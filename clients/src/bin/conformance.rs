//! `css-data-conformance` — Validates a built property table against the
//! inputs it was merged from.
//!
//! Runs the table validators:
//! - inventory (one record per known and reference name)
//! - status and reference fields (`status`, `syntax`, `mdn_url`)
//! - exclusions (excluded names carry no reference data)
//! - known fields (curated fields survive the merge)
//! - descriptions (reference-only `desc` matches `--descriptions`)
//!
//! **Usage:**
//! ```
//! css-data-conformance --known <path> --reference <path> [--descriptions <path>] [--table <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails. Log verbosity follows
//! `RUST_LOG` (default `warn`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use css_data_conformance::{run_all, Severity, TablePaths};
use tracing_subscriber::EnvFilter;

/// Run the property table conformance suite.
#[derive(Parser)]
#[command(
    name = "css-data-conformance",
    about = "Validate a built CSS property table against its inputs"
)]
struct Args {
    /// Path to the built table (default: out/css-properties.json).
    #[arg(long, default_value = "out/css-properties.json")]
    table: PathBuf,

    /// Curated known properties the table was built from.
    #[arg(long)]
    known: PathBuf,

    /// Reference dataset the table was built from.
    #[arg(long)]
    reference: PathBuf,

    /// Description table the table was built from (omit if none was used).
    #[arg(long)]
    descriptions: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let report = run_all(&TablePaths {
        table: args.table,
        known: args.known,
        reference: args.reference,
        descriptions: args.descriptions,
    })?;

    println!("CSS Property Table Conformance Report");
    println!("=====================================");
    println!();

    for result in &report.results {
        println!("[{}] {} — {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let failed = report.count(Severity::Failure);
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
