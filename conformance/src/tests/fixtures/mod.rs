//! Merge input fixtures for conformance validation.
//!
//! A small slice of real-world data: a curated known list, a reference
//! dataset in the `mdn-data` `css` shape, and a description table. Together
//! they exercise every merge path (overlay, pass-through, exclusion, at-rule
//! flattening, reference-only synthesis).

mod descriptions;
mod known;
mod reference;

pub use descriptions::DESCRIPTIONS;
pub use known::KNOWN_PROPERTIES;
pub use reference::REFERENCE_DATASET;
