//! CSS property data encoded as typed Rust data.
//!
//! The `css-data-spec` crate models the three inputs of a property-table
//! build (curated known properties, the `mdn-data` reference catalog, and a
//! supplementary description table) and the merged output record, along with
//! JSON loaders and a JSON serializer for the merged table.
//!
//! # Entry Point
//!
//! ```
//! let dataset = css_data_spec::load::reference_dataset_from_str(
//!     r#"{ "properties": { "gap": { "status": "experimental" } } }"#,
//! ).unwrap();
//! assert_eq!(dataset.properties.len(), 1);
//! ```
//!
//! # Serialization
//!
//! ```
//! let table: Vec<css_data_spec::MergedProperty> = Vec::new();
//! let json = css_data_spec::serializer::json::to_json(&table);
//! assert!(json.as_array().is_some_and(Vec::is_empty));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod load;
pub mod model;
pub mod serializer;

pub use load::LoadError;
pub use model::{
    keys, AtRule, DescriptionTable, KnownProperty, MergedProperty, ReferenceDataset,
    ReferenceProperty, Status,
};
