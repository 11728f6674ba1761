//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::options::{BundleOptions, ModuleFormat, PluginItem};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate bundle options
    fn validate(&self, config: &BundleOptions) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use rollpack_config::{BundleOptions, ConfigValidator, SchemaValidator, UmdOptions};
///
/// let config = BundleOptions::default().with_umd(UmdOptions::named("MyLib"));
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BundleOptions) -> Result<()> {
        if let Some(file) = &config.file {
            validate_file_override("file", file)?;
        }
        for format in ModuleFormat::ALL {
            if let Some(file) = config.raw_format_file(format) {
                validate_file_override(&format!("{format}.file"), file)?;
            }
        }

        if let Some(umd) = &config.umd {
            if let Some(name) = &umd.name {
                validate_global_name(name)?;
            }

            for (module, global) in &umd.globals {
                if module.trim().is_empty() {
                    return Err(ConfigError::SchemaValidation {
                        message: "umd.globals keys cannot be empty".to_string(),
                        hint: Some("Use the module id as the key, e.g. \"react\"".to_string()),
                    });
                }
                if !global.split('.').all(is_identifier) {
                    return Err(ConfigError::InvalidValue {
                        field: format!("umd.globals.{module}"),
                        hint: Some(format!("'{global}' is not a global variable reference")),
                    });
                }
            }
        }

        validate_plugin_items("extraPostcssPlugins", &config.extra_postcss_plugins)?;
        validate_plugin_items("extraBabelPresets", &config.extra_babel_presets)?;
        validate_plugin_items("extraBabelPlugins", &config.extra_babel_plugins)?;

        for (module, exports) in &config.named_exports {
            if exports.iter().any(|name| !is_identifier(name)) {
                return Err(ConfigError::InvalidValue {
                    field: format!("namedExports.{module}"),
                    hint: Some("Export names must be valid identifiers".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`] and checks that the configured entry exists.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BundleOptions) -> Result<()> {
        SchemaValidator.validate(config)?;

        if let Some(entry) = &config.entry {
            let path = self.root.join(entry);
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        Ok(())
    }
}

/// Validate a global name follows JavaScript identifier rules.
pub fn validate_global_name(name: &str) -> Result<()> {
    if is_identifier(name) {
        return Ok(());
    }

    let hint = match name.chars().next() {
        None => "Global name cannot be empty".to_string(),
        Some(first) if !is_identifier_start(first) => format!(
            "Must start with letter, underscore, or dollar sign (got '{first}')"
        ),
        Some(_) => "Only letters, digits, '_' and '$' are allowed".to_string(),
    };

    Err(ConfigError::InvalidValue {
        field: "umd.name".to_string(),
        hint: Some(hint),
    })
}

/// Empty overrides mean "use the derived name"; whitespace-only ones are typos.
fn validate_file_override(field: &str, file: &str) -> Result<()> {
    if !file.is_empty() && file.trim().is_empty() {
        return Err(ConfigError::SchemaValidation {
            message: format!("{field} cannot be blank"),
            hint: Some("Remove the override to use the entry file name".to_string()),
        });
    }
    Ok(())
}

fn validate_plugin_items(field: &str, items: &[PluginItem]) -> Result<()> {
    if items.iter().any(|item| item.name().trim().is_empty()) {
        return Err(ConfigError::SchemaValidation {
            message: format!("{field} contains an empty plugin name"),
            hint: Some("Use a package name or a [name, options] pair".to_string()),
        });
    }
    Ok(())
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BundleOptions) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BundleOptions, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OutputOverride, UmdOptions};

    #[test]
    fn default_options_are_valid() {
        assert!(SchemaValidator.validate(&BundleOptions::default()).is_ok());
    }

    #[test]
    fn rejects_invalid_umd_name() {
        let config = BundleOptions::default().with_umd(UmdOptions::named("my-lib"));
        let err = SchemaValidator.validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "umd.name"));
    }

    #[test]
    fn accepts_dotted_global_reference() {
        let config = BundleOptions::default()
            .with_umd(UmdOptions::named("Lib").with_global("lodash", "window._"));
        assert!(validate_schema(&config).is_ok());
    }

    #[test]
    fn rejects_bad_global_reference() {
        let config = BundleOptions::default()
            .with_umd(UmdOptions::named("Lib").with_global("react", "1React"));
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_blank_file_override() {
        let config = BundleOptions {
            esm: Some(OutputOverride {
                file: Some("  ".to_string()),
            }),
            ..BundleOptions::default()
        };
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("esm.file"));
    }

    #[test]
    fn empty_file_override_means_derived_name() {
        let config = BundleOptions {
            file: Some(String::new()),
            esm: Some(OutputOverride {
                file: Some(String::new()),
            }),
            ..BundleOptions::default()
        };
        assert!(validate_schema(&config).is_ok());
    }

    #[test]
    fn rejects_empty_plugin_name() {
        let config = BundleOptions {
            extra_babel_plugins: vec![PluginItem::new("")],
            ..BundleOptions::default()
        };
        assert!(matches!(
            validate_schema(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn global_name_hints() {
        let err = validate_global_name("").unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
        let err = validate_global_name("9lives").unwrap_err();
        assert!(err.to_string().contains("'9'"));
        assert!(validate_global_name("$lib_2").is_ok());
    }
}
