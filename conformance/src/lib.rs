//! css-data conformance suite.
//!
//! Checks a built property table against the inputs it was merged from, so a
//! table produced by any build (or edited by hand) can be verified before it
//! ships to the language service.
//!
//! # Conformance Scope
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `table/inventory` | one record per known and reference name, nothing else |
//! | `table/status` | status codes, `syntax` and `mdn_url` match the reference data |
//! | `table/exclusions` | excluded names never carry reference data |
//! | `table/known-fields` | curated fields reach their record unchanged |
//! | `table/descriptions` | reference-only `desc` comes from the description table |
//!
//! # Entry Point
//!
//! ```no_run
//! use css_data_conformance::{run_all, TablePaths};
//! use std::path::PathBuf;
//!
//! let paths = TablePaths {
//!     table: PathBuf::from("out/css-properties.json"),
//!     known: PathBuf::from("data/known-properties.json"),
//!     reference: PathBuf::from("data/mdn-css.json"),
//!     descriptions: Some(PathBuf::from("data/descriptions.json")),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
#[cfg(test)]
mod tests;
pub mod validators;

use std::path::PathBuf;

use anyhow::{Context, Result};
use css_data_codegen::ExclusionList;
use css_data_spec::serializer::json;
use css_data_spec::{load, DescriptionTable};

pub use report::{ConformanceReport, Severity, TestResult};
pub use validators::Inputs;

/// Files required by the conformance runner.
pub struct TablePaths {
    /// The built property table.
    pub table: PathBuf,
    /// Known property list the table was built from.
    pub known: PathBuf,
    /// Reference dataset the table was built from.
    pub reference: PathBuf,
    /// Description table the table was built from; `None` means empty.
    pub descriptions: Option<PathBuf>,
}

/// Loads the table and its inputs, then runs every validator.
///
/// # Errors
///
/// Returns an error only if a file cannot be read or parsed.
pub fn run_all(paths: &TablePaths) -> Result<ConformanceReport> {
    let content = std::fs::read_to_string(&paths.table)
        .with_context(|| format!("Failed to read {}", paths.table.display()))?;
    let table = json::from_str(&content).with_context(|| {
        format!("Failed to parse {} as a property table", paths.table.display())
    })?;
    let known = load::load_known_properties(&paths.known)?;
    let reference = load::load_reference_dataset(&paths.reference)?;
    let descriptions = match &paths.descriptions {
        Some(path) => load::load_descriptions(path)?,
        None => DescriptionTable::new(),
    };
    let exclusions = ExclusionList::default();

    Ok(validate(&Inputs {
        table: &table,
        known: &known,
        reference: &reference,
        descriptions: &descriptions,
        exclusions: &exclusions,
    }))
}

/// Runs every validator over in-memory inputs.
///
/// Validators are run in this order:
/// 1. Inventory (names, coverage, record count)
/// 2. Status and reference fields
/// 3. Exclusions
/// 4. Curated known fields
/// 5. Reference-only descriptions
pub fn validate(inputs: &Inputs<'_>) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.extend(validators::inventory::validate(inputs));
    report.extend(validators::status::validate(inputs));
    report.extend(validators::exclusions::validate(inputs));
    report.extend(validators::known_fields::validate(inputs));
    report.extend(validators::descriptions::validate(inputs));
    tracing::debug!(
        results = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    report
}

#[cfg(test)]
mod tests_unit {
    use super::*;
    use css_data_codegen::PropertyMerger;
    use css_data_spec::{keys, KnownProperty, MergedProperty, ReferenceDataset};
    use serde_json::{json, Value};

    use crate::tests::fixtures::{DESCRIPTIONS, KNOWN_PROPERTIES, REFERENCE_DATASET};

    struct Fixture {
        known: Vec<KnownProperty>,
        reference: ReferenceDataset,
        descriptions: DescriptionTable,
        exclusions: ExclusionList,
        table: Vec<MergedProperty>,
    }

    impl Fixture {
        fn build() -> Self {
            let known = load::known_properties_from_str(KNOWN_PROPERTIES).expect("known");
            let reference = load::reference_dataset_from_str(REFERENCE_DATASET).expect("reference");
            let descriptions = load::descriptions_from_str(DESCRIPTIONS).expect("descriptions");
            let table = PropertyMerger::new(&reference, &descriptions).merge(&known);
            Self {
                known,
                reference,
                descriptions,
                exclusions: ExclusionList::default(),
                table,
            }
        }

        fn validate(&self) -> ConformanceReport {
            validate(&Inputs {
                table: &self.table,
                known: &self.known,
                reference: &self.reference,
                descriptions: &self.descriptions,
                exclusions: &self.exclusions,
            })
        }

        fn edit(&mut self, name: &str, key: &str, value: Option<Value>) {
            let index = self
                .table
                .iter()
                .position(|r| r.name() == Some(name))
                .expect("record exists");
            let mut fields = self.table[index].clone().into_fields();
            match value {
                Some(value) => {
                    fields.insert(key.to_owned(), value);
                }
                None => {
                    fields.shift_remove(key);
                }
            }
            self.table[index] = fields.into();
        }
    }

    fn failures(report: &ConformanceReport) -> Vec<&TestResult> {
        report.results.iter().filter(|r| r.is_failure()).collect()
    }

    #[test]
    fn merged_fixture_conforms() {
        let fixture = Fixture::build();
        let report = fixture.validate();
        assert!(
            report.all_passed(),
            "conformance failures: {:#?}",
            failures(&report)
        );
    }

    #[test]
    fn merged_fixture_layout() {
        let fixture = Fixture::build();
        let names: Vec<Option<&str>> = fixture.table.iter().map(MergedProperty::name).collect();
        assert_eq!(
            names,
            [
                Some("color"),
                Some("-ms-accelerator"),
                Some("zoom"),
                Some("motion-path"),
                None,
                Some("gap"),
                Some("anchor-name"),
                Some("clip"),
                Some("font-display"),
                Some("size-adjust"),
                Some("size"),
            ]
        );
        let size_adjust = &fixture.table[9];
        assert_eq!(
            css_data_spec::serializer::json::to_json(std::slice::from_ref(size_adjust)),
            json!([{
                "name": "size-adjust",
                "desc": "",
                "restriction": "none",
                "syntax": "<percentage>"
            }])
        );
    }

    #[test]
    fn missing_record_fails_inventory() {
        let mut fixture = Fixture::build();
        fixture.table.retain(|r| r.name() != Some("anchor-name"));
        let report = fixture.validate();
        let failed = failures(&report);
        assert!(failed.iter().all(|r| r.validator == "table/inventory"));
        assert!(failed
            .iter()
            .any(|r| r.details.iter().any(|d| d == "anchor-name is missing")));
    }

    #[test]
    fn duplicate_record_fails_inventory() {
        let mut fixture = Fixture::build();
        let gap = fixture.table[5].clone();
        fixture.table.push(gap);
        let report = fixture.validate();
        assert!(failures(&report)
            .iter()
            .any(|r| r.details.iter().any(|d| d == "gap appears 2 times")));
    }

    #[test]
    fn standard_status_code_fails() {
        let mut fixture = Fixture::build();
        fixture.edit("gap", keys::STATUS, Some(json!("s")));
        let report = fixture.validate();
        let failed = failures(&report);
        assert_eq!(failed.len(), 2);
        assert!(failed.iter().all(|r| r.validator == "table/status"));
    }

    #[test]
    fn stale_syntax_fails() {
        let mut fixture = Fixture::build();
        fixture.edit("zoom", keys::SYNTAX, Some(json!("normal")));
        let report = fixture.validate();
        let failed = failures(&report);
        assert_eq!(failed.len(), 1);
        assert!(failed[0].details[0].starts_with("zoom: syntax expected"));
    }

    #[test]
    fn lost_curated_fields_fail() {
        let mut fixture = Fixture::build();
        fixture.edit("color", keys::DESC, None);
        fixture.edit("color", keys::RESTRICTION, None);
        fixture.edit("-ms-accelerator", "browsers", Some(json!(["E"])));
        let report = fixture.validate();
        let failed = failures(&report);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].validator, "table/known-fields");
        assert_eq!(
            failed[0].details,
            [
                r#"-ms-accelerator: browsers expected ["E","IE10"], found ["E"]"#,
                "color: desc missing",
                "color: restriction missing",
            ]
        );
    }

    #[test]
    fn unmatched_known_status_must_survive() {
        let mut fixture = Fixture::build();
        fixture.known[1] = fixture.known[1].clone().with("status", "n");
        let report = fixture.validate();
        let failed = failures(&report);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].details, ["-ms-accelerator: status missing"]);
    }

    #[test]
    fn wrong_description_fails() {
        let mut fixture = Fixture::build();
        fixture.edit("gap", keys::DESC, Some(json!("WRONG")));
        fixture.edit("clip", keys::DESC, Some(json!("Clips an element.")));
        let report = fixture.validate();
        let failed = failures(&report);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].validator, "table/descriptions");
        assert_eq!(failed[0].details.len(), 2);
        assert!(failed[0].details[0].starts_with("gap: desc expected"));
        assert_eq!(
            failed[0].details[1],
            r#"clip: desc expected "", found Some("Clips an element.")"#
        );
    }

    #[test]
    fn description_table_drives_expected_desc() {
        let mut fixture = Fixture::build();
        fixture.descriptions.insert("clip", "Clips an element.");
        assert!(!fixture.validate().all_passed());
        fixture.edit("clip", keys::DESC, Some(json!("Clips an element.")));
        assert!(fixture.validate().all_passed());
    }

    #[test]
    fn curated_status_on_standard_property_passes() {
        let mut fixture = Fixture::build();
        fixture.known[0] = fixture.known[0].clone().with("status", "curated");
        fixture.edit("color", keys::STATUS, Some(json!("curated")));
        assert!(fixture.validate().all_passed());
    }

    #[test]
    fn excluded_reference_data_fails() {
        let mut fixture = Fixture::build();
        fixture.edit("motion-path", keys::STATUS, Some(json!("o")));
        let report = fixture.validate();
        assert!(failures(&report).iter().any(|r| r.validator == "table/exclusions"
            && r.details == ["motion-path differs from its known entry"]));
    }

    #[test]
    fn run_all_reads_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let fixture = Fixture::build();
        let paths = TablePaths {
            table: dir.path().join("table.json"),
            known: dir.path().join("known.json"),
            reference: dir.path().join("reference.json"),
            descriptions: Some(dir.path().join("descriptions.json")),
        };
        css_data_codegen::emit::write_table(&paths.table, &fixture.table).expect("write table");
        std::fs::write(&paths.known, KNOWN_PROPERTIES).expect("write known");
        std::fs::write(&paths.reference, REFERENCE_DATASET).expect("write reference");
        if let Some(path) = &paths.descriptions {
            std::fs::write(path, DESCRIPTIONS).expect("write descriptions");
        }

        let report = run_all(&paths).expect("run");
        assert!(report.all_passed());
        assert_eq!(report.count(Severity::Pass), report.results.len());
    }

    #[test]
    fn run_all_without_descriptions_expects_empty_desc() {
        let dir = tempfile::tempdir().expect("tempdir");
        let fixture = Fixture::build();
        let paths = TablePaths {
            table: dir.path().join("table.json"),
            known: dir.path().join("known.json"),
            reference: dir.path().join("reference.json"),
            descriptions: None,
        };
        css_data_codegen::emit::write_table(&paths.table, &fixture.table).expect("write table");
        std::fs::write(&paths.known, KNOWN_PROPERTIES).expect("write known");
        std::fs::write(&paths.reference, REFERENCE_DATASET).expect("write reference");

        let report = run_all(&paths).expect("run");
        let failed = failures(&report);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].validator, "table/descriptions");
    }
}
