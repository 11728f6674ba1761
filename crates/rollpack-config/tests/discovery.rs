//! Tests for config file discovery, loading and environment layering.

use rollpack_config::{ConfigDiscovery, ConfigError, PluginItem, Target};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn discovers_rollpack_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("rollpack.toml"),
        r#"
entry = "src/index.ts"
target = "node"
extraBabelPlugins = ["babel-plugin-lodash", ["babel-plugin-import", { libraryName = "antd" }]]

[esm]
file = "index.module"
"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path()).with_env_prefix("RP_DISCOVERY_TOML_");
    assert_eq!(discovery.find().unwrap().file_name().unwrap(), "rollpack.toml");

    let options = discovery.load().unwrap();
    assert_eq!(options.entry, Some(PathBuf::from("src/index.ts")));
    assert_eq!(options.target, Target::Node);
    assert_eq!(options.esm.unwrap().file.as_deref(), Some("index.module"));
    assert_eq!(
        options.extra_babel_plugins,
        vec![
            PluginItem::new("babel-plugin-lodash"),
            PluginItem::with_options("babel-plugin-import", json!({ "libraryName": "antd" })),
        ]
    );
}

#[test]
fn discovers_package_json_field() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
  "name": "lib",
  "dependencies": { "lodash": "^4.0.0" },
  "rollpack": {
    "cssModules": true,
    "umd": { "name": "Lib", "globals": { "react": "React" } }
  }
}"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path()).with_env_prefix("RP_DISCOVERY_PKG_");
    assert_eq!(discovery.find().unwrap().file_name().unwrap(), "package.json");

    let options = discovery.load().unwrap();
    assert!(options.css_modules);
    let umd = options.umd.unwrap();
    assert_eq!(umd.name.as_deref(), Some("Lib"));
    assert_eq!(umd.globals.get("react").map(String::as_str), Some("React"));
    assert!(umd.min_file);
}

#[test]
fn toml_takes_precedence_over_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rollpack.toml"), "file = \"from-toml\"\n").unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "rollpack": { "file": "from-package" } }"#,
    )
    .unwrap();

    let options = ConfigDiscovery::new(dir.path())
        .with_env_prefix("RP_DISCOVERY_PRECEDENCE_")
        .load()
        .unwrap();
    assert_eq!(options.file.as_deref(), Some("from-toml"));
}

#[test]
fn environment_overrides_file_values() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("rollpack.toml"),
        "target = \"browser\"\n[umd]\nname = \"FromFile\"\n",
    )
    .unwrap();

    // Unique prefix: other tests never read these variables
    unsafe {
        std::env::set_var("RP_DISCOVERY_ENV_TARGET", "node");
        std::env::set_var("RP_DISCOVERY_ENV_CSS_MODULES", "true");
        std::env::set_var("RP_DISCOVERY_ENV_UMD__NAME", "FromEnv");
    }

    let options = ConfigDiscovery::new(dir.path())
        .with_env_prefix("RP_DISCOVERY_ENV_")
        .load()
        .unwrap();

    assert_eq!(options.target, Target::Node);
    assert!(options.css_modules);
    assert_eq!(options.umd.unwrap().name.as_deref(), Some("FromEnv"));
}

#[test]
fn invalid_toml_reports_invalid_value() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rollpack.toml"), "file = [unterminated").unwrap();

    let err = ConfigDiscovery::new(dir.path())
        .with_env_prefix("RP_DISCOVERY_BAD_")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn null_package_field_is_not_a_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{ "rollpack": null }"#).unwrap();

    let discovery = ConfigDiscovery::new(dir.path()).with_env_prefix("RP_DISCOVERY_NULL_");
    assert!(discovery.find().is_none());
    assert!(matches!(discovery.load(), Err(ConfigError::NotFound)));
}
