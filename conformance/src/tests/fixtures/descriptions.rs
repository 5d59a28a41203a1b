//! Supplementary descriptions for reference-only properties.

/// Description table fixture.
pub const DESCRIPTIONS: &str = r#"{
  "gap": "The gap CSS property sets the gaps (gutters) between rows and columns.",
  "anchor-name": "The anchor-name property declares an element to be an anchor element.",
  "font-display": "Determines how a font face is displayed based on whether and when it is downloaded and ready to use."
}"#;
