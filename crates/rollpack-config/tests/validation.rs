//! Filesystem validation tests.

use rollpack_config::{validate_fs, BundleOptions, ConfigError, UmdOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn fs_validator_accepts_existing_entry() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/index.ts"), "export {}").unwrap();

    let config = BundleOptions::default().with_entry("src/index.ts");
    assert!(validate_fs(&config, dir.path()).is_ok());
}

#[test]
fn fs_validator_rejects_missing_entry() {
    let dir = TempDir::new().unwrap();
    let config = BundleOptions::default().with_entry("src/missing.ts");

    match validate_fs(&config, dir.path()).unwrap_err() {
        ConfigError::EntryNotFound { path } => assert!(path.ends_with("src/missing.ts")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fs_validator_rejects_directory_entry() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    let config = BundleOptions::default().with_entry("src");
    assert!(validate_fs(&config, dir.path()).is_err());
}

#[test]
fn fs_validator_runs_schema_checks_first() {
    let dir = TempDir::new().unwrap();
    let config = BundleOptions::default()
        .with_entry("src/missing.ts")
        .with_umd(UmdOptions::named("not valid"));

    assert!(matches!(
        validate_fs(&config, dir.path()).unwrap_err(),
        ConfigError::InvalidValue { .. }
    ));
}

#[test]
fn options_without_entry_skip_fs_checks() {
    let dir = TempDir::new().unwrap();
    assert!(validate_fs(&BundleOptions::default(), dir.path()).is_ok());
}
