//! CSS property table generator.
//!
//! Merges a curated list of [`KnownProperty`] descriptors with metadata from
//! the reference catalog ([`ReferenceDataset`]): standard status, syntax
//! grammar and documentation link. The result is one [`MergedProperty`] per
//! distinct property name, consumed by editor language-feature tooling.
//!
//! # Merge steps
//!
//! 1. Flatten at-rule descriptors into the top-level properties ([`flatten`])
//! 2. Drop the excluded reference names ([`exclusions`])
//! 3. Overlay reference fields onto known properties, in known-list order
//! 4. Append reference-only properties with a default description
//!
//! ```
//! use css_data_codegen::PropertyMerger;
//! use css_data_spec::{DescriptionTable, KnownProperty, ReferenceDataset};
//!
//! let reference = ReferenceDataset::default();
//! let descriptions = DescriptionTable::new();
//! let merger = PropertyMerger::new(&reference, &descriptions);
//! let table = merger.merge(&[KnownProperty::new("color")]);
//! assert_eq!(table.len(), 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod exclusions;
pub mod flatten;
pub mod status;

use std::collections::HashMap;

use css_data_spec::{
    keys, DescriptionTable, KnownProperty, MergedProperty, ReferenceDataset, ReferenceProperty,
};
use serde_json::{Map, Value};

pub use exclusions::{ExclusionList, DEFAULT_EXCLUDED};
pub use status::{abbreviate_status, ReferenceFields};

/// Report of what a merge produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Known properties overlaid with reference fields.
    pub augmented: usize,
    /// Known properties with no reference entry, emitted unchanged.
    pub unchanged: usize,
    /// Known entries without a usable name, passed through.
    pub nameless: usize,
    /// Known entries whose name repeated an earlier entry.
    pub duplicates: usize,
    /// Properties synthesized from reference data alone.
    pub added: usize,
    /// Excluded names that were present in the reference data.
    pub excluded: Vec<String>,
    /// Reference properties overwritten by an at-rule descriptor.
    pub collisions: usize,
}

/// The merged table together with its report.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Merged records: known-list order first, then reference-only records.
    pub properties: Vec<MergedProperty>,
    /// Counts describing the merge.
    pub report: MergeReport,
}

/// Merges known property descriptors with a reference dataset.
///
/// The merger borrows its reference inputs and never mutates them; the same
/// merger can be reused for several known lists.
#[derive(Debug, Clone)]
pub struct PropertyMerger<'a> {
    reference: &'a ReferenceDataset,
    descriptions: &'a DescriptionTable,
    exclusions: ExclusionList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Augmented,
    Unchanged,
    Nameless,
    ReferenceOnly,
}

impl<'a> PropertyMerger<'a> {
    /// Creates a merger over `reference` using the default exclusion list.
    #[must_use]
    pub fn new(reference: &'a ReferenceDataset, descriptions: &'a DescriptionTable) -> Self {
        Self {
            reference,
            descriptions,
            exclusions: ExclusionList::default(),
        }
    }

    /// Replaces the exclusion list.
    #[must_use]
    pub fn with_exclusions(mut self, exclusions: ExclusionList) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Merges `known` with the reference data and returns the merged table.
    #[must_use]
    pub fn merge(&self, known: &[KnownProperty]) -> Vec<MergedProperty> {
        self.merge_with_report(known).properties
    }

    /// Merges `known` with the reference data and reports what happened.
    #[must_use]
    pub fn merge_with_report(&self, known: &[KnownProperty]) -> MergeOutcome {
        let mut flattened = flatten::flatten(self.reference);
        let excluded = self.exclusions.apply(&mut flattened.properties);
        let reference = &flattened.properties;

        let mut slots: Vec<(MergedProperty, Origin)> =
            Vec::with_capacity(known.len() + reference.len());
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(known.len());
        let mut duplicates = 0;

        for entry in known {
            let Some(name) = entry.name() else {
                slots.push((entry.clone().into(), Origin::Nameless));
                continue;
            };

            let slot = match reference.get(name) {
                Some(prop) => (overlay(entry, prop), Origin::Augmented),
                None => (entry.clone().into(), Origin::Unchanged),
            };

            match positions.get(name) {
                Some(&index) => {
                    tracing::warn!(%name, "duplicate known property; later entry replaces earlier");
                    duplicates += 1;
                    slots[index] = slot;
                }
                None => {
                    positions.insert(name, slots.len());
                    slots.push(slot);
                }
            }
        }

        for (name, prop) in reference {
            if positions.contains_key(*name) {
                continue;
            }
            slots.push((self.synthesize(name, prop), Origin::ReferenceOnly));
        }

        let count = |origin: Origin| slots.iter().filter(|(_, o)| *o == origin).count();
        let report = MergeReport {
            augmented: count(Origin::Augmented),
            unchanged: count(Origin::Unchanged),
            nameless: count(Origin::Nameless),
            duplicates,
            added: count(Origin::ReferenceOnly),
            excluded: excluded.into_iter().map(str::to_owned).collect(),
            collisions: flattened.collisions.len(),
        };

        tracing::info!(
            total = slots.len(),
            augmented = report.augmented,
            unchanged = report.unchanged,
            added = report.added,
            excluded = report.excluded.len(),
            "merged property table"
        );

        MergeOutcome {
            properties: slots.into_iter().map(|(record, _)| record).collect(),
            report,
        }
    }

    /// Builds a record for a name found only in the reference data.
    fn synthesize(&self, name: &str, prop: &ReferenceProperty) -> MergedProperty {
        let desc = self.descriptions.get(name).unwrap_or_default();
        let mut fields = Map::new();
        fields.insert(keys::NAME.to_owned(), Value::String(name.to_owned()));
        fields.insert(keys::DESC.to_owned(), Value::String(desc.to_owned()));
        fields.insert(
            keys::RESTRICTION.to_owned(),
            Value::String(keys::RESTRICTION_NONE.to_owned()),
        );
        ReferenceFields::extract(prop).apply(&mut fields);
        fields.into()
    }
}

/// Shallow-copies a known entry and lays the reference fields over it.
fn overlay(known: &KnownProperty, prop: &ReferenceProperty) -> MergedProperty {
    let mut fields = known.fields().clone();
    ReferenceFields::extract(prop).apply(&mut fields);
    fields.into()
}

/// Merges `known` with `reference` using the default exclusion list.
#[must_use]
pub fn merge(
    known: &[KnownProperty],
    reference: &ReferenceDataset,
    descriptions: &DescriptionTable,
) -> Vec<MergedProperty> {
    PropertyMerger::new(reference, descriptions).merge(known)
}
