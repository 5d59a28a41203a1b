//! Reference dataset in the `mdn-data` `css` shape.

/// Reference dataset fixture.
pub const REFERENCE_DATASET: &str = r#"{
  "properties": {
    "--*": {
      "syntax": "<declaration-value>",
      "status": "experimental",
      "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/--*"
    },
    "block-overflow": {
      "syntax": "clip | ellipsis | <string>",
      "status": "experimental"
    },
    "color": {
      "syntax": "<color>",
      "initial": "canvastext",
      "status": "standard",
      "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/color"
    },
    "gap": {
      "syntax": "<'row-gap'> <'column-gap'>?",
      "status": "standard",
      "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/gap"
    },
    "motion-path": {
      "syntax": "none | <path()>",
      "status": "obsolete"
    },
    "anchor-name": {
      "syntax": "none | <dashed-ident>#",
      "status": "experimental",
      "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/anchor-name"
    },
    "zoom": {
      "syntax": "normal | reset | <number> | <percentage>",
      "status": "nonstandard",
      "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/zoom"
    },
    "clip": {
      "syntax": "<shape> | auto",
      "status": "obsolete",
      "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/clip"
    }
  },
  "atRules": {
    "@page": {
      "syntax": "@page <page-selector-list> { <page-body> }",
      "descriptors": {
        "size": {
          "syntax": "<length>{1,2} | auto | [ <page-size> || [ portrait | landscape ] ]",
          "status": "standard"
        }
      },
      "status": "standard"
    },
    "@font-face": {
      "syntax": "@font-face { <declaration-list> }",
      "descriptors": {
        "font-display": {
          "syntax": "[ auto | block | swap | fallback | optional ]",
          "status": "standard",
          "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/@font-face/font-display"
        },
        "size-adjust": {
          "syntax": "<percentage>",
          "status": "standard"
        }
      },
      "status": "standard"
    },
    "@charset": {
      "syntax": "@charset \"<charset>\";",
      "status": "standard"
    }
  }
}"#;
