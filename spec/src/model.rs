//! Core property model types.
//!
//! Three record families flow through a merge:
//! - [`KnownProperty`]: curated descriptors, arbitrary JSON fields keyed by `name`
//! - [`ReferenceProperty`]: status/syntax/documentation metadata from the
//!   reference dataset ([`ReferenceDataset`]), optionally nested in at-rules
//! - [`MergedProperty`]: the output record
//!
//! Known and merged records are insertion-ordered JSON objects so the emitted
//! table is byte-for-byte reproducible.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Standardization status of a reference property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Confirmed standard.
    Standard,
    /// Vendor-specific or otherwise non-standard.
    Nonstandard,
    /// Experimental; may change.
    Experimental,
    /// Obsolete; should not be used.
    Obsolete,
    /// Any other status string found in the reference data.
    Other(String),
}

impl Status {
    /// Parses a status string as it appears in the reference dataset.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "standard" => Status::Standard,
            "nonstandard" => Status::Nonstandard,
            "experimental" => Status::Experimental,
            "obsolete" => Status::Obsolete,
            other => Status::Other(other.to_owned()),
        }
    }

    /// Returns the status string as it appears in the reference dataset.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Status::Standard => "standard",
            Status::Nonstandard => "nonstandard",
            Status::Experimental => "experimental",
            Status::Obsolete => "obsolete",
            Status::Other(other) => other,
        }
    }
}

/// Metadata for one property or at-rule descriptor in the reference dataset.
///
/// Fields that are missing or not strings in the source are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReferenceProperty {
    /// Standardization status.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<Status>,
    /// Value grammar, e.g. `"<color>"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub syntax: Option<String>,
    /// Documentation link.
    #[serde(default, deserialize_with = "lenient_string")]
    pub mdn_url: Option<String>,
}

impl ReferenceProperty {
    /// Creates an entry with the given status and no syntax or link.
    #[must_use]
    pub fn with_status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Sets the syntax grammar.
    #[must_use]
    pub fn syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = Some(syntax.into());
        self
    }

    /// Sets the documentation link.
    #[must_use]
    pub fn mdn_url(mut self, url: impl Into<String>) -> Self {
        self.mdn_url = Some(url.into());
        self
    }
}

/// An at-rule group (e.g. `@font-face`) in the reference dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AtRule {
    /// Descriptor properties declared by this at-rule, if any.
    #[serde(default)]
    pub descriptors: Option<IndexMap<String, ReferenceProperty>>,
}

/// The reference catalog: top-level properties plus at-rule descriptors.
///
/// Mirrors the shape of the `mdn-data` `css` export; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceDataset {
    /// Top-level properties, in source order.
    #[serde(default)]
    pub properties: IndexMap<String, ReferenceProperty>,
    /// At-rule groups keyed by at-rule name (e.g. `"@font-face"`).
    #[serde(default)]
    pub at_rules: IndexMap<String, AtRule>,
}

impl ReferenceDataset {
    /// Returns the number of descriptor entries across all at-rules.
    #[must_use]
    pub fn descriptor_count(&self) -> usize {
        self.at_rules
            .values()
            .filter_map(|rule| rule.descriptors.as_ref())
            .map(IndexMap::len)
            .sum()
    }
}

/// Supplementary name → description lookup for reference-only properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionTable {
    entries: IndexMap<String, String>,
}

impl DescriptionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the description for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Adds or replaces a description.
    pub fn insert(&mut self, name: impl Into<String>, desc: impl Into<String>) {
        self.entries.insert(name.into(), desc.into());
    }

    /// Returns the number of descriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no descriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DescriptionTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A curated property descriptor: an ordered JSON object with a `name` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownProperty {
    fields: Map<String, Value>,
}

impl KnownProperty {
    /// Creates a descriptor with only a `name` field.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(keys::NAME.to_owned(), Value::String(name.into()));
        Self { fields }
    }

    /// Adds a field, replacing any previous value under `key`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns the property name if it is a non-empty string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        non_empty_name(&self.fields)
    }

    /// Returns all fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for KnownProperty {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// One record of the merged property table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergedProperty {
    fields: Map<String, Value>,
}

impl MergedProperty {
    /// Returns the property name if it is a non-empty string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        non_empty_name(&self.fields)
    }

    /// Returns the value of `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the string value of `key`, if present and a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Returns the abbreviated status code, if the record carries one.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.get_str(keys::STATUS)
    }

    /// Returns the syntax grammar, if present.
    #[must_use]
    pub fn syntax(&self) -> Option<&str> {
        self.get_str(keys::SYNTAX)
    }

    /// Returns the documentation link, if present.
    #[must_use]
    pub fn mdn_url(&self) -> Option<&str> {
        self.get_str(keys::MDN_URL)
    }

    /// Returns all fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the record and returns its fields.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for MergedProperty {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<KnownProperty> for MergedProperty {
    fn from(known: KnownProperty) -> Self {
        Self {
            fields: known.fields,
        }
    }
}

/// Field names used in known and merged records.
pub mod keys {
    /// Property name; the merge key.
    pub const NAME: &str = "name";
    /// Free-text description.
    pub const DESC: &str = "desc";
    /// Value-restriction tag.
    pub const RESTRICTION: &str = "restriction";
    /// Abbreviated status code.
    pub const STATUS: &str = "status";
    /// Value grammar.
    pub const SYNTAX: &str = "syntax";
    /// Documentation link.
    pub const MDN_URL: &str = "mdn_url";

    /// Restriction given to properties synthesized from reference data alone.
    pub const RESTRICTION_NONE: &str = "none";
}

fn non_empty_name(fields: &Map<String, Value>) -> Option<&str> {
    fields
        .get(keys::NAME)
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<Status>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(Status::parse))
}
