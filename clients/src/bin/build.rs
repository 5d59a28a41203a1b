//! `css-data-build` — Merges the curated property list with reference data
//! and writes the combined property table.
//!
//! **Inputs:**
//! - `--known` — JSON array of curated property descriptors
//! - `--reference` — reference dataset in the `mdn-data` `css` shape
//! - `--descriptions` — optional JSON object of fallback descriptions
//!
//! **Output:** `<out>` (default `out/css-properties.json`), pretty-printed JSON.
//!
//! **Usage:**
//! ```
//! css-data-build --known <path> --reference <path> [--descriptions <path>] [--out <path>]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `warn`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use css_data_codegen::{emit, PropertyMerger};
use css_data_spec::{load, DescriptionTable};
use tracing_subscriber::EnvFilter;

/// Build the merged CSS property table.
#[derive(Parser)]
#[command(name = "css-data-build", about = "Build the merged CSS property table")]
struct Args {
    /// Curated known properties (JSON array).
    #[arg(long)]
    known: PathBuf,

    /// Reference dataset (JSON object with `properties` and `atRules`).
    #[arg(long)]
    reference: PathBuf,

    /// Fallback descriptions for reference-only properties (JSON object).
    #[arg(long)]
    descriptions: Option<PathBuf>,

    /// Output file for the merged table.
    #[arg(long, default_value = "out/css-properties.json")]
    out: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let known = load::load_known_properties(&args.known)?;
    let reference = load::load_reference_dataset(&args.reference)?;
    let descriptions = match &args.descriptions {
        Some(path) => load::load_descriptions(path)?,
        None => DescriptionTable::new(),
    };

    let outcome = PropertyMerger::new(&reference, &descriptions).merge_with_report(&known);
    let report = &outcome.report;

    // Print summary
    println!(
        "CSS property table: {} properties ({} augmented, {} unchanged, {} added from reference, {} excluded)",
        outcome.properties.len(),
        report.augmented,
        report.unchanged + report.nameless,
        report.added,
        report.excluded.len()
    );
    if report.duplicates > 0 {
        println!("  Duplicate known names collapsed: {}", report.duplicates);
    }
    if report.collisions > 0 {
        println!("  At-rule descriptors overriding properties: {}", report.collisions);
    }

    emit::write_table(&args.out, &outcome.properties)?;
    tracing::info!(path = %args.out.display(), "wrote property table");
    println!("  Written: {}", args.out.display());

    println!("Build complete.");
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
