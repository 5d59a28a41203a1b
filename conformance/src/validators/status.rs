//! Status and reference-field validator.
//!
//! Verifies that every record backed by a reference entry carries exactly the
//! fields the merge lays over it: the abbreviated `status` (none for
//! `standard`), `syntax` and `mdn_url`. Status codes must be `n`, `e` or `o`
//! unless the value came from the known list itself.

use css_data_codegen::ReferenceFields;
use css_data_spec::{keys, MergedProperty};
use serde_json::Value;

use super::Inputs;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/status";
const CODES: &[&str] = &["n", "e", "o"];

/// Validates status codes and reference-derived fields.
pub fn validate(inputs: &Inputs<'_>) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(check_codes(inputs));
    report.push(check_reference_fields(inputs));
    report
}

fn check_codes(inputs: &Inputs<'_>) -> TestResult {
    let known = inputs.known_by_name();
    let offenders = inputs
        .table
        .iter()
        .filter_map(|record| {
            let status = record.get(keys::STATUS)?;
            if status.as_str().is_some_and(|code| CODES.contains(&code)) {
                return None;
            }
            let curated = record
                .name()
                .and_then(|name| known.get(name))
                .and_then(|entry| entry.fields().get(keys::STATUS));
            if curated == Some(status) {
                return None;
            }
            Some(format!("{}: unexpected status {status}", label(record)))
        })
        .collect();
    TestResult::check(
        VALIDATOR,
        offenders,
        "Every status is an abbreviation or a curated value",
        "Unexpected status values",
    )
}

fn check_reference_fields(inputs: &Inputs<'_>) -> TestResult {
    let table = inputs.table_by_name();
    let known = inputs.known_by_name();
    let mut offenders = Vec::new();

    for (name, prop) in &inputs.reference_names().properties {
        let Some(record) = table.get(*name) else {
            continue;
        };
        let expected = ReferenceFields::extract(prop);

        let expected_status = match expected.status {
            Some(code) => code.map(|c| Value::String(c.to_owned())),
            None => known
                .get(*name)
                .and_then(|entry| entry.fields().get(keys::STATUS))
                .cloned(),
        };
        compare(&mut offenders, name, keys::STATUS, expected_status, record);
        compare(
            &mut offenders,
            name,
            keys::SYNTAX,
            expected.syntax.map(|s| Value::String(s.to_owned())),
            record,
        );
        compare(
            &mut offenders,
            name,
            keys::MDN_URL,
            expected.mdn_url.map(|s| Value::String(s.to_owned())),
            record,
        );
    }

    TestResult::check(
        VALIDATOR,
        offenders,
        "Reference fields match the reference dataset",
        "Reference fields differ from the reference dataset",
    )
}

fn compare(
    offenders: &mut Vec<String>,
    name: &str,
    key: &str,
    expected: Option<Value>,
    record: &MergedProperty,
) {
    let found = record.get(key);
    if found != expected.as_ref() {
        offenders.push(format!(
            "{name}: {key} expected {}, found {}",
            show(expected.as_ref()),
            show(found)
        ));
    }
}

fn show(value: Option<&Value>) -> String {
    value.map_or_else(|| "nothing".to_owned(), Value::to_string)
}

fn label(record: &MergedProperty) -> &str {
    record.name().unwrap_or("<unnamed>")
}
