//! File-based config discovery for CLI use
//!
//! Finds rollpack options on disk and layers them with figment:
//! defaults, then the discovered file, then `ROLLPACK_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::options::BundleOptions;

/// Prefix of environment variables that override file options
pub const ENV_PREFIX: &str = "ROLLPACK_";

const TOML_FILE: &str = "rollpack.toml";
const PACKAGE_JSON: &str = "package.json";
const PACKAGE_FIELD: &str = "rollpack";

/// File-based configuration discovery
///
/// Library users should build [`BundleOptions`] directly or via
/// [`BundleOptions::from_value`].
///
/// # Example
///
/// ```no_run
/// use rollpack_config::ConfigDiscovery;
///
/// let options = ConfigDiscovery::new(".").load_or_default().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
    env_prefix: String,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Read overrides from a different environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. rollpack.toml
    /// 2. package.json (`rollpack` field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(TOML_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        if let Ok(content) = fs::read_to_string(&pkg_path) {
            if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                if parsed.get(PACKAGE_FIELD).is_some_and(|v| !v.is_null()) {
                    return Some(pkg_path);
                }
            }
        }

        None
    }

    /// Load options from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<BundleOptions> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.extract(Some(&path))
    }

    /// Load options, falling back to defaults (plus environment) when no
    /// config file exists
    pub fn load_or_default(&self) -> Result<BundleOptions> {
        let path = self.find();
        if path.is_none() {
            tracing::debug!(root = %self.root.display(), "no rollpack config found, using defaults");
        }
        self.extract(path.as_deref())
    }

    fn extract(&self, source: Option<&Path>) -> Result<BundleOptions> {
        let mut figment = Figment::new().merge(Serialized::defaults(BundleOptions::default()));

        if let Some(path) = source {
            tracing::debug!(path = %path.display(), "loading rollpack config");
            figment = if path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON)) {
                figment.merge(Serialized::defaults(self.package_field(path)?))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        figment = figment.merge(
            Env::prefixed(&self.env_prefix)
                .split("__")
                .lowercase(false)
                .map(|key| camel_case_path(&key.as_str().to_ascii_lowercase()).into()),
        );

        figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }

    fn package_field(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;

        let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: PACKAGE_JSON.to_string(),
            hint: Some(format!("Invalid JSON: {e}")),
        })?;

        match parsed.get(PACKAGE_FIELD) {
            Some(value) if !value.is_null() => Ok(value.clone()),
            _ => Err(ConfigError::InvalidValue {
                field: PACKAGE_FIELD.to_string(),
                hint: Some("Add a 'rollpack' field to your package.json".to_string()),
            }),
        }
    }
}

/// `css_modules.min_file` -> `cssModules.minFile`
fn camel_case_path(key: &str) -> String {
    key.split('.')
        .map(|segment| {
            let mut out = String::with_capacity(segment.len());
            let mut upper = false;
            for c in segment.chars() {
                if c == '_' {
                    upper = !out.is_empty();
                } else if upper {
                    out.extend(c.to_uppercase());
                    upper = false;
                } else {
                    out.push(c);
                }
            }
            out
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Discover and load options from the current directory (convenience function)
pub fn discover() -> Result<BundleOptions> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn discovery(dir: &TempDir) -> ConfigDiscovery {
        // Isolated prefix so the host environment cannot leak in
        ConfigDiscovery::new(dir.path()).with_env_prefix("ROLLPACK_UNIT_TEST_UNUSED_")
    }

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        assert!(discovery(&dir).find().is_none());
    }

    #[test]
    fn package_json_without_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "x" }"#).unwrap();
        assert!(discovery(&dir).find().is_none());
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let result = discovery(&dir).load();
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound));
    }

    #[test]
    fn load_or_default_without_file() {
        let dir = TempDir::new().unwrap();
        let options = discovery(&dir).load_or_default().unwrap();
        assert_eq!(options, BundleOptions::default());
    }

    #[test]
    fn load_parses_toml_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("rollpack.toml"),
            r#"
file = "lib"
cssModules = true

[umd]
name = "Lib"
minFile = false
"#,
        )
        .unwrap();

        let options = discovery(&dir).load().unwrap();
        assert_eq!(options.file.as_deref(), Some("lib"));
        assert!(options.css_modules);
        let umd = options.umd.unwrap();
        assert_eq!(umd.name.as_deref(), Some("Lib"));
        assert!(!umd.min_file);
    }

    #[test]
    fn camel_case_path_converts_each_segment() {
        assert_eq!(camel_case_path("css_modules"), "cssModules");
        assert_eq!(camel_case_path("umd.min_file"), "umd.minFile");
        assert_eq!(camel_case_path("target"), "target");
    }
}
