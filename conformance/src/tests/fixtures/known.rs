//! Curated known properties.
//!
//! `color` and `zoom` have reference entries; `-ms-accelerator` does not;
//! `motion-path` is excluded from the reference side; the last entry has no
//! name.

/// Known property list fixture.
pub const KNOWN_PROPERTIES: &str = r#"[
  {
    "name": "color",
    "desc": "Sets the color of an element's text",
    "restriction": "color"
  },
  {
    "name": "-ms-accelerator",
    "desc": "IE only. Has the ability to turn off its system underlines for accelerator keys until the ALT key is pressed",
    "browsers": ["E", "IE10"],
    "restriction": "enum"
  },
  {
    "name": "zoom",
    "desc": "Non-standard. Specifies the magnification scale of the object.",
    "restriction": "enum, integer, number, percentage",
    "status": "n"
  },
  {
    "name": "motion-path",
    "desc": "Legacy alias kept for old stylesheets.",
    "restriction": "url, shape, geometry-box, enum"
  },
  {
    "desc": "Unnamed entry kept as-is."
  }
]"#;
