//! Tests for default values and edge cases.

use rollpack_config::{BundleOptions, ModuleFormat, OutputOverride, Target, UmdOptions};
use serde_json::json;

#[test]
fn bundle_options_defaults() {
    let opts = BundleOptions::default();
    assert!(opts.entry.is_none());
    assert!(opts.file.is_none());
    assert_eq!(opts.target, Target::Browser);
    assert!(opts.esm.is_none());
    assert!(opts.cjs.is_none());
    assert!(opts.umd.is_none());
    assert!(!opts.css_modules);
    assert!(opts.extra_postcss_plugins.is_empty());
    assert!(opts.extra_babel_presets.is_empty());
    assert!(opts.extra_babel_plugins.is_empty());
    assert!(opts.autoprefixer.is_none());
    assert!(opts.named_exports.is_empty());
    assert!(opts.enabled_formats().is_empty());
}

#[test]
fn umd_options_defaults() {
    let umd = UmdOptions::default();
    assert!(umd.file.is_none());
    assert!(umd.name.is_none());
    assert!(umd.globals.is_empty());
    assert!(umd.min_file);
}

#[test]
fn empty_object_deserializes_to_defaults() {
    let opts = BundleOptions::from_value(json!({})).unwrap();
    assert_eq!(opts, BundleOptions::default());
}

#[test]
fn empty_format_sections_enable_formats() {
    let opts = BundleOptions::from_value(json!({ "esm": {}, "cjs": {}, "umd": {} })).unwrap();
    assert_eq!(opts.enabled_formats(), ModuleFormat::ALL.to_vec());
    assert_eq!(opts.esm, Some(OutputOverride::default()));
}

#[test]
fn named_exports_preserve_order() {
    let opts = BundleOptions::from_value(json!({
        "namedExports": {
            "react-is": ["isValidElementType"],
            "prop-types": ["any", "bool"]
        }
    }))
    .unwrap();
    let keys: Vec<_> = opts.named_exports.keys().cloned().collect();
    assert_eq!(keys, vec!["react-is", "prop-types"]);
}

#[test]
fn invalid_target_is_rejected() {
    let err = BundleOptions::from_value(json!({ "target": "deno" })).unwrap_err();
    assert!(err.to_string().contains("bundle options"));
}

#[test]
fn serialized_defaults_omit_absent_sections() {
    let value = BundleOptions::default().to_value().unwrap();
    assert!(value.get("umd").is_none());
    assert!(value.get("autoprefixer").is_none());
    assert_eq!(value["target"], json!("browser"));
}
