//! JSON loaders for the three merge inputs.
//!
//! - known properties: a JSON array of objects
//! - reference dataset: the `mdn-data` `css` shape (`properties`, `atRules`)
//! - descriptions: a JSON object mapping property name to description text
//!
//! Each file loader has a `*_from_str` twin that parses in-memory JSON.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{DescriptionTable, KnownProperty, ReferenceDataset};

/// Origin reported for JSON parsed from memory.
const INLINE: &str = "<inline>";

/// Errors raised while loading merge inputs.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The content is not valid JSON, or not of the expected JSON shape.
    #[error("failed to parse {} as JSON", path.display())]
    Json {
        /// File (or `<inline>`) that failed to parse.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The JSON parsed but has the wrong structure.
    #[error("{}: {message}", path.display())]
    Shape {
        /// File (or `<inline>`) with the wrong structure.
        path: PathBuf,
        /// What was wrong.
        message: String,
    },
}

/// Loads the known property list from a JSON file.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read, is not JSON, or is not an
/// array of objects.
pub fn load_known_properties(path: &Path) -> Result<Vec<KnownProperty>, LoadError> {
    let content = read(path)?;
    let known = parse_known(&content, path)?;
    tracing::debug!(path = %path.display(), count = known.len(), "loaded known properties");
    Ok(known)
}

/// Parses a known property list from JSON text.
///
/// # Errors
///
/// Returns [`LoadError`] if the text is not a JSON array of objects.
pub fn known_properties_from_str(content: &str) -> Result<Vec<KnownProperty>, LoadError> {
    parse_known(content, Path::new(INLINE))
}

/// Loads the reference dataset from a JSON file.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or does not have the
/// reference dataset shape.
pub fn load_reference_dataset(path: &Path) -> Result<ReferenceDataset, LoadError> {
    let content = read(path)?;
    let dataset = parse_reference(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        properties = dataset.properties.len(),
        at_rules = dataset.at_rules.len(),
        "loaded reference dataset"
    );
    Ok(dataset)
}

/// Parses a reference dataset from JSON text.
///
/// # Errors
///
/// Returns [`LoadError`] if the text does not have the reference dataset shape.
pub fn reference_dataset_from_str(content: &str) -> Result<ReferenceDataset, LoadError> {
    parse_reference(content, Path::new(INLINE))
}

/// Loads the supplementary description table from a JSON file.
///
/// Entries whose value is not a string are skipped.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or is not a JSON object.
pub fn load_descriptions(path: &Path) -> Result<DescriptionTable, LoadError> {
    let content = read(path)?;
    let table = parse_descriptions(&content, path)?;
    tracing::debug!(path = %path.display(), count = table.len(), "loaded descriptions");
    Ok(table)
}

/// Parses a description table from JSON text.
///
/// # Errors
///
/// Returns [`LoadError`] if the text is not a JSON object.
pub fn descriptions_from_str(content: &str) -> Result<DescriptionTable, LoadError> {
    parse_descriptions(content, Path::new(INLINE))
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(content: &str, path: &Path) -> Result<T, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Json {
        path: path.to_owned(),
        source,
    })
}

fn parse_known(content: &str, path: &Path) -> Result<Vec<KnownProperty>, LoadError> {
    let value: Value = parse_json(content, path)?;
    let Value::Array(items) = value else {
        return Err(LoadError::Shape {
            path: path.to_owned(),
            message: "known properties must be a JSON array".to_owned(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(KnownProperty::from(fields)),
            other => Err(LoadError::Shape {
                path: path.to_owned(),
                message: format!(
                    "known property at index {index} is not an object: {}",
                    type_name(&other)
                ),
            }),
        })
        .collect()
}

fn parse_reference(content: &str, path: &Path) -> Result<ReferenceDataset, LoadError> {
    parse_json(content, path)
}

fn parse_descriptions(content: &str, path: &Path) -> Result<DescriptionTable, LoadError> {
    let map: Map<String, Value> = parse_json(content, path)?;
    Ok(map
        .into_iter()
        .filter_map(|(name, desc)| match desc {
            Value::String(desc) => Some((name, desc)),
            _ => None,
        })
        .collect())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
