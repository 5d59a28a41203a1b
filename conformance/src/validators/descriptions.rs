//! Description validator.
//!
//! Records synthesized from reference data alone take their `desc` from the
//! description table, or the empty string when the table has no entry.

use css_data_spec::keys;

use super::Inputs;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/descriptions";

/// Validates `desc` on reference-only records.
pub fn validate(inputs: &Inputs<'_>) -> ConformanceReport {
    let table = inputs.table_by_name();
    let known = inputs.known_by_name();
    let mut offenders = Vec::new();

    for name in inputs.reference_names().properties.keys() {
        if known.contains_key(*name) {
            continue;
        }
        let Some(record) = table.get(*name) else {
            continue;
        };
        let expected = inputs.descriptions.get(name).unwrap_or_default();
        match record.get_str(keys::DESC) {
            Some(found) if found == expected => {}
            found => {
                offenders.push(format!("{name}: desc expected {expected:?}, found {found:?}"));
            }
        }
    }

    let mut report = ConformanceReport::new();
    report.push(TestResult::check(
        VALIDATOR,
        offenders,
        "Reference-only descriptions match the description table",
        "Reference-only descriptions differ from the description table",
    ));
    report
}
