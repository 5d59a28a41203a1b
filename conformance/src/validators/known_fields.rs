//! Known-field validator.
//!
//! Every field of a named known entry must reach its record unchanged. When
//! the name has a reference entry, the overlay keys (`status`, `syntax`,
//! `mdn_url`) are exempt; `table/status` checks those.

use css_data_spec::keys;

use super::Inputs;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/known-fields";
const OVERLAY_KEYS: &[&str] = &[keys::STATUS, keys::SYNTAX, keys::MDN_URL];

/// Validates that curated fields survive the merge.
pub fn validate(inputs: &Inputs<'_>) -> ConformanceReport {
    let table = inputs.table_by_name();
    let reference = inputs.reference_names();
    let mut offenders = Vec::new();

    let mut known: Vec<_> = inputs.known_by_name().into_iter().collect();
    known.sort_unstable_by_key(|(name, _)| *name);

    for (name, entry) in known {
        let Some(record) = table.get(name) else {
            continue;
        };
        let overlaid = reference.properties.contains_key(name);
        for (key, value) in entry.fields() {
            if overlaid && OVERLAY_KEYS.contains(&key.as_str()) {
                continue;
            }
            match record.get(key) {
                Some(found) if found == value => {}
                Some(found) => {
                    offenders.push(format!("{name}: {key} expected {value}, found {found}"));
                }
                None => offenders.push(format!("{name}: {key} missing")),
            }
        }
    }

    let mut report = ConformanceReport::new();
    report.push(TestResult::check(
        VALIDATOR,
        offenders,
        "Curated fields survive the merge",
        "Curated fields lost or changed",
    ));
    report
}
