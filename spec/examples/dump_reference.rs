//! Demonstrates loading a reference dataset and summarizing it.
//!
//! Run with: `cargo run --example dump_reference -p css-data-spec -- <mdn-css.json>`

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use css_data_spec::{load, Status};

/// Summarize an `mdn-data` CSS reference dataset.
#[derive(Parser)]
#[command(name = "dump_reference")]
struct Args {
    /// Reference dataset (JSON object with `properties` and `atRules`).
    path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let dataset = load::load_reference_dataset(&args.path)?;

    println!("Reference dataset {}", args.path.display());
    println!("  Properties:   {}", dataset.properties.len());
    println!("  At-rules:     {}", dataset.at_rules.len());
    println!("  Descriptors:  {}", dataset.descriptor_count());
    println!();

    // Status breakdown of top-level properties.
    for status in [
        Status::Standard,
        Status::Nonstandard,
        Status::Experimental,
        Status::Obsolete,
    ] {
        let count = dataset
            .properties
            .values()
            .filter(|p| p.status.as_ref() == Some(&status))
            .count();
        println!("  {:14} {:>4}", status.as_str(), count);
    }

    println!();
    for (name, rule) in &dataset.at_rules {
        let descriptors = rule.descriptors.as_ref().map_or(0, |d| d.len());
        println!("  {:20} {:>3} descriptors", name, descriptors);
    }

    Ok(())
}
