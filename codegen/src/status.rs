//! Status abbreviation and reference-field extraction.
//!
//! Only three reference fields reach the merged table: `status` (as a
//! single-letter code), `syntax` and `mdn_url`. A `standard` status carries no
//! code at all, so standard properties have no `status` key.

use css_data_spec::{keys, ReferenceProperty, Status};
use serde_json::{Map, Value};

/// Returns the single-letter code for a non-standard maturity level.
///
/// `nonstandard → "n"`, `experimental → "e"`, `obsolete → "o"`; every other
/// status (including `standard`) has no code.
#[must_use]
pub fn abbreviate_status(status: &Status) -> Option<&'static str> {
    match status {
        Status::Nonstandard => Some("n"),
        Status::Experimental => Some("e"),
        Status::Obsolete => Some("o"),
        Status::Standard | Status::Other(_) => None,
    }
}

/// The reference fields laid over a record during a merge.
///
/// A field set to `None` is removed from the record it is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFields<'a> {
    /// `None` when the reference status is `standard`: the record's own
    /// `status` key is then left untouched.
    pub status: Option<Option<&'static str>>,
    /// Syntax grammar.
    pub syntax: Option<&'a str>,
    /// Documentation link.
    pub mdn_url: Option<&'a str>,
}

impl<'a> ReferenceFields<'a> {
    /// Extracts the fields used by the merged table from a reference entry.
    #[must_use]
    pub fn extract(reference: &'a ReferenceProperty) -> Self {
        let status = match &reference.status {
            Some(Status::Standard) => None,
            other => Some(other.as_ref().and_then(abbreviate_status)),
        };
        Self {
            status,
            syntax: reference.syntax.as_deref(),
            mdn_url: reference.mdn_url.as_deref(),
        }
    }

    /// Writes these fields onto `fields`.
    ///
    /// Keys already present keep their position; new keys are appended in
    /// `status`, `syntax`, `mdn_url` order.
    pub fn apply(&self, fields: &mut Map<String, Value>) {
        if let Some(status) = self.status {
            set_or_remove(fields, keys::STATUS, status);
        }
        set_or_remove(fields, keys::SYNTAX, self.syntax);
        set_or_remove(fields, keys::MDN_URL, self.mdn_url);
    }
}

fn set_or_remove(fields: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    match value {
        Some(value) => {
            fields.insert(key.to_owned(), Value::String(value.to_owned()));
        }
        None => {
            fields.shift_remove(key);
        }
    }
}
