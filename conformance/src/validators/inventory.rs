//! Inventory validator.
//!
//! Verifies the set of records in a built table:
//! - every record is named, or is a nameless known entry passed through as-is
//! - no name appears twice
//! - every known name is present
//! - every reference name (after exclusion) is present, and reference-only
//!   records carry `restriction: "none"`
//! - the table has no records beyond those

use std::collections::{HashMap, HashSet};

use css_data_spec::keys;

use super::Inputs;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/inventory";

/// Validates which records a built table contains.
pub fn validate(inputs: &Inputs<'_>) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(check_nameless(inputs));
    report.push(check_unique(inputs));
    report.push(check_known_covered(inputs));
    report.push(check_reference_covered(inputs));
    report.push(check_size(inputs));
    report
}

fn check_nameless(inputs: &Inputs<'_>) -> TestResult {
    let passthrough: Vec<_> = inputs
        .known
        .iter()
        .filter(|entry| entry.name().is_none())
        .map(|entry| entry.fields())
        .collect();
    let offenders = inputs
        .table
        .iter()
        .enumerate()
        .filter(|(_, record)| record.name().is_none())
        .filter(|(_, record)| !passthrough.contains(&record.fields()))
        .map(|(index, _)| format!("record {index} has no name"))
        .collect();
    TestResult::check(
        VALIDATOR,
        offenders,
        "Every record is named or a passed-through nameless entry",
        "Records without a name that are not in the known list",
    )
}

fn check_unique(inputs: &Inputs<'_>) -> TestResult {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in inputs.table.iter().filter_map(|r| r.name()) {
        *counts.entry(name).or_default() += 1;
    }
    let mut offenders: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, count)| format!("{name} appears {count} times"))
        .collect();
    offenders.sort();
    TestResult::check(
        VALIDATOR,
        offenders,
        "Property names are unique",
        "Duplicate property names",
    )
}

fn check_known_covered(inputs: &Inputs<'_>) -> TestResult {
    let table = inputs.table_by_name();
    let offenders = inputs
        .known
        .iter()
        .filter_map(|entry| entry.name())
        .filter(|name| !table.contains_key(*name))
        .map(str::to_owned)
        .collect();
    TestResult::check(
        VALIDATOR,
        offenders,
        "Every known property is present",
        "Known properties missing from the table",
    )
}

fn check_reference_covered(inputs: &Inputs<'_>) -> TestResult {
    let table = inputs.table_by_name();
    let known = inputs.known_by_name();
    let mut offenders = Vec::new();
    for name in inputs.reference_names().properties.keys() {
        match table.get(*name) {
            None => offenders.push(format!("{name} is missing")),
            Some(record) if !known.contains_key(*name) => {
                let restriction = record.get_str(keys::RESTRICTION);
                if restriction != Some(keys::RESTRICTION_NONE) {
                    offenders.push(format!(
                        "{name} is reference-only but has restriction {restriction:?}"
                    ));
                }
            }
            Some(_) => {}
        }
    }
    TestResult::check(
        VALIDATOR,
        offenders,
        "Every reference property is present",
        "Reference properties missing or malformed",
    )
}

fn check_size(inputs: &Inputs<'_>) -> TestResult {
    let nameless = inputs.known.iter().filter(|e| e.name().is_none()).count();
    let mut names: HashSet<&str> = inputs.known_by_name().into_keys().collect();
    names.extend(inputs.reference_names().properties.keys().copied());
    let expected = nameless + names.len();
    let actual = inputs.table.len();
    if actual == expected {
        TestResult::pass(VALIDATOR, format!("Correct record count: {actual}"))
    } else {
        TestResult::fail(
            VALIDATOR,
            format!("Wrong record count: expected {expected}, got {actual}"),
        )
    }
}
