//! Reference names kept out of the merged table.

use css_data_spec::ReferenceProperty;
use indexmap::IndexMap;

/// Reference property names that are never merged from the reference side.
pub const DEFAULT_EXCLUDED: &[&str] = &[
    // custom properties
    "--*",
    // renamed to `overflow-block`
    "block-overflow",
    // superseded by the `offset` family
    "motion",
    "motion-offset",
    "motion-path",
    "motion-rotation",
];

/// A set of property names removed from the flattened reference namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionList {
    names: Vec<String>,
}

impl Default for ExclusionList {
    fn default() -> Self {
        DEFAULT_EXCLUDED.iter().copied().collect()
    }
}

impl ExclusionList {
    /// An empty list; every reference name is merged.
    #[must_use]
    pub fn none() -> Self {
        Self { names: Vec::new() }
    }

    /// Returns true if `name` is excluded.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Iterates over the excluded names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Removes every excluded name from `properties`, keeping the order of the
    /// rest, and returns the names that were actually present.
    pub fn apply<'a>(
        &'a self,
        properties: &mut IndexMap<&str, &ReferenceProperty>,
    ) -> Vec<&'a str> {
        self.iter()
            .filter(|name| {
                let removed = properties.shift_remove(*name).is_some();
                if removed {
                    tracing::debug!(%name, "excluded reference property");
                }
                removed
            })
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
