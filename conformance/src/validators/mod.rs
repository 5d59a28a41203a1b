//! Property table validators.
//!
//! Each validator checks one family of merge invariants against a built table
//! and the inputs it was built from. Validators do no I/O.

pub mod descriptions;
pub mod exclusions;
pub mod inventory;
pub mod known_fields;
pub mod status;

use std::collections::HashMap;

use css_data_codegen::flatten::{flatten, Flattened};
use css_data_codegen::ExclusionList;
use css_data_spec::{DescriptionTable, KnownProperty, MergedProperty, ReferenceDataset};

/// A built table together with the inputs it was merged from.
#[derive(Debug, Clone, Copy)]
pub struct Inputs<'a> {
    /// The merged property table under test.
    pub table: &'a [MergedProperty],
    /// Known property list the table was built from.
    pub known: &'a [KnownProperty],
    /// Reference dataset the table was built from.
    pub reference: &'a ReferenceDataset,
    /// Description table used for reference-only records.
    pub descriptions: &'a DescriptionTable,
    /// Exclusion list used for the build.
    pub exclusions: &'a ExclusionList,
}

impl<'a> Inputs<'a> {
    /// Known entries by name; a repeated name maps to its last entry.
    fn known_by_name(&self) -> HashMap<&'a str, &'a KnownProperty> {
        self.known
            .iter()
            .filter_map(|entry| entry.name().map(|name| (name, entry)))
            .collect()
    }

    /// Table records by name; a repeated name maps to its last record.
    fn table_by_name(&self) -> HashMap<&'a str, &'a MergedProperty> {
        self.table
            .iter()
            .filter_map(|record| record.name().map(|name| (name, record)))
            .collect()
    }

    /// The reference namespace after flattening and exclusion.
    fn reference_names(&self) -> Flattened<'a> {
        let mut flattened = flatten(self.reference);
        self.exclusions.apply(&mut flattened.properties);
        flattened
    }
}
