//! At-rule flattening.
//!
//! Reference properties live in two places: the top-level `properties`
//! mapping and the `descriptors` of each at-rule. Flattening puts both in one
//! namespace keyed by name. At-rules are visited in lexicographic name order
//! and a descriptor replaces any earlier entry of the same name, keeping that
//! entry's position.

use css_data_spec::{ReferenceDataset, ReferenceProperty};
use indexmap::IndexMap;

/// A descriptor that replaced an earlier entry of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision<'a> {
    /// Property name.
    pub name: &'a str,
    /// At-rule whose descriptor won.
    pub at_rule: &'a str,
}

/// The flattened reference namespace.
#[derive(Debug, Default)]
pub struct Flattened<'a> {
    /// All reference properties by name, in flattened order.
    pub properties: IndexMap<&'a str, &'a ReferenceProperty>,
    /// Names overwritten by an at-rule descriptor.
    pub collisions: Vec<Collision<'a>>,
}

/// Flattens top-level properties and at-rule descriptors into one mapping.
#[must_use]
pub fn flatten(dataset: &ReferenceDataset) -> Flattened<'_> {
    let mut flattened = Flattened {
        properties: dataset
            .properties
            .iter()
            .map(|(name, prop)| (name.as_str(), prop))
            .collect(),
        collisions: Vec::new(),
    };

    let mut at_rules: Vec<_> = dataset.at_rules.iter().collect();
    at_rules.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    for (at_rule, group) in at_rules {
        let Some(descriptors) = &group.descriptors else {
            continue;
        };
        for (name, descriptor) in descriptors {
            if flattened
                .properties
                .insert(name.as_str(), descriptor)
                .is_some()
            {
                tracing::debug!(
                    %name,
                    %at_rule,
                    "at-rule descriptor overwrites reference property"
                );
                flattened.collisions.push(Collision {
                    name: name.as_str(),
                    at_rule: at_rule.as_str(),
                });
            }
        }
    }

    flattened
}
