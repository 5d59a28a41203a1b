//! Exclusion validator.
//!
//! Excluded reference names may appear in the table only when the known list
//! supplies them, and then exactly as curated.

use super::Inputs;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/exclusions";

/// Validates that excluded names carry no reference data.
pub fn validate(inputs: &Inputs<'_>) -> ConformanceReport {
    let table = inputs.table_by_name();
    let known = inputs.known_by_name();

    let offenders = inputs
        .exclusions
        .iter()
        .filter_map(|name| {
            let record = table.get(name)?;
            match known.get(name) {
                Some(entry) if record.fields() == entry.fields() => None,
                Some(_) => Some(format!("{name} differs from its known entry")),
                None => Some(format!("{name} comes from reference data")),
            }
        })
        .collect();

    let mut report = ConformanceReport::new();
    report.push(TestResult::check(
        VALIDATOR,
        offenders,
        "Excluded properties carry no reference data",
        "Excluded properties merged from reference data",
    ));
    report
}
