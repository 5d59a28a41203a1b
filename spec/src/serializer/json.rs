//! JSON serializer for the merged property table.
//!
//! Produces a single JSON array with one object per [`MergedProperty`], in
//! table order. Field order inside each object is the record's insertion
//! order, so repeated builds from the same inputs produce identical text.

use serde_json::Value;

use crate::model::MergedProperty;

/// Serializes a merged property table to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(table: &[MergedProperty]) -> Value {
    Value::Array(
        table
            .iter()
            .map(|record| Value::Object(record.fields().clone()))
            .collect(),
    )
}

/// Serializes a merged property table to pretty-printed JSON text with a
/// trailing newline.
///
/// # Errors
///
/// Returns an error only if a field value cannot be represented as JSON text.
pub fn to_string_pretty(table: &[MergedProperty]) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(&to_json(table))?;
    text.push('\n');
    Ok(text)
}

/// Parses a previously serialized table.
///
/// # Errors
///
/// Returns an error if `content` is not a JSON array of objects.
pub fn from_str(content: &str) -> serde_json::Result<Vec<MergedProperty>> {
    serde_json::from_str(content)
}
