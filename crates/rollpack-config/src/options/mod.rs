//! Bundle option types shared across rollpack crates.

mod helpers;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use types::{ModuleFormat, Target};

use helpers::default_true;

/// High-level "bundle this package" options
///
/// Every field is optional. Absent per-format overrides fall back to names
/// derived from the entry file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BundleOptions {
    /// Entry file used when the caller does not pass one explicitly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<PathBuf>,

    /// Output base name for every format (default: entry file stem)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Environment the transpiled code targets
    pub target: Target,

    /// ESM overrides; presence enables the format in multi-format planning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esm: Option<OutputOverride>,

    /// CommonJS overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cjs: Option<OutputOverride>,

    /// UMD overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub umd: Option<UmdOptions>,

    /// Scope class names per style-sheet
    pub css_modules: bool,

    /// PostCSS plugins appended after autoprefixer
    #[serde(alias = "extraPostCSSPlugins")]
    pub extra_postcss_plugins: Vec<PluginItem>,

    /// Babel presets appended after the target defaults
    pub extra_babel_presets: Vec<PluginItem>,

    /// Babel plugins appended after the target defaults
    pub extra_babel_plugins: Vec<PluginItem>,

    /// Autoprefixer settings, forwarded verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoprefixer: Option<Value>,

    /// Named-export hints for the CommonJS bridge, keyed by module id
    pub named_exports: IndexMap<String, Vec<String>>,
}

impl BundleOptions {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use rollpack_config::BundleOptions;
    /// use serde_json::json;
    ///
    /// let options = BundleOptions::from_value(json!({
    ///     "file": "lib",
    ///     "cssModules": true,
    ///     "umd": { "name": "Lib", "minFile": false }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(options.file.as_deref(), Some("lib"));
    /// assert!(options.css_modules);
    /// assert!(!options.umd.unwrap().min_file);
    /// ```
    pub fn from_value(value: Value) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_value(value).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "bundle options".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, crate::error::ConfigError> {
        serde_json::to_value(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "bundle options".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Formats switched on by the presence of their override section, in
    /// planning order (esm, cjs, umd).
    pub fn enabled_formats(&self) -> Vec<ModuleFormat> {
        ModuleFormat::ALL
            .into_iter()
            .filter(|format| match format {
                ModuleFormat::Esm => self.esm.is_some(),
                ModuleFormat::Cjs => self.cjs.is_some(),
                ModuleFormat::Umd => self.umd.is_some(),
            })
            .collect()
    }

    /// File override configured for a single format, if any
    ///
    /// An empty override counts as absent.
    pub fn format_file(&self, format: ModuleFormat) -> Option<&str> {
        self.raw_format_file(format).filter(|file| !file.is_empty())
    }

    /// Shared output base name override; an empty string counts as absent
    pub fn output_file(&self) -> Option<&str> {
        self.file.as_deref().filter(|file| !file.is_empty())
    }

    pub(crate) fn raw_format_file(&self, format: ModuleFormat) -> Option<&str> {
        match format {
            ModuleFormat::Esm => self.esm.as_ref().and_then(|o| o.file.as_deref()),
            ModuleFormat::Cjs => self.cjs.as_ref().and_then(|o| o.file.as_deref()),
            ModuleFormat::Umd => self.umd.as_ref().and_then(|o| o.file.as_deref()),
        }
    }

    /// Set the default entry file
    pub fn with_entry(mut self, entry: impl Into<PathBuf>) -> Self {
        self.entry = Some(entry.into());
        self
    }

    /// Enable the UMD build with the given overrides
    pub fn with_umd(mut self, umd: UmdOptions) -> Self {
        self.umd = Some(umd);
        self
    }
}

/// Per-format output override for esm/cjs builds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputOverride {
    /// Output file name without `.js`, relative to `dist/`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Universal-module build overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmdOptions {
    /// Output file name without `.js` (default: `<name>.umd`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Global variable the bundle is exposed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// External module id to global variable reference
    #[serde(default)]
    pub globals: IndexMap<String, String>,

    /// Also emit a minified production build
    #[serde(default = "default_true")]
    pub min_file: bool,
}

impl Default for UmdOptions {
    fn default() -> Self {
        Self {
            file: None,
            name: None,
            globals: IndexMap::new(),
            min_file: true,
        }
    }
}

impl UmdOptions {
    /// Overrides exposing the bundle under `name`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_global(mut self, module: impl Into<String>, global: impl Into<String>) -> Self {
        self.globals.insert(module.into(), global.into());
        self
    }
}

/// Plugin or preset reference: a bare name or a `[name, options]` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginItem {
    Name(String),
    WithOptions(String, Value),
}

impl PluginItem {
    pub fn new(name: impl Into<String>) -> Self {
        PluginItem::Name(name.into())
    }

    pub fn with_options(name: impl Into<String>, options: Value) -> Self {
        PluginItem::WithOptions(name.into(), options)
    }

    pub fn name(&self) -> &str {
        match self {
            PluginItem::Name(name) | PluginItem::WithOptions(name, _) => name,
        }
    }

    pub fn options(&self) -> Option<&Value> {
        match self {
            PluginItem::Name(_) => None,
            PluginItem::WithOptions(_, options) => Some(options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plugin_item_accepts_both_shapes() {
        let items: Vec<PluginItem> =
            serde_json::from_value(json!(["a", ["b", { "loose": true }]])).unwrap();
        assert_eq!(items[0], PluginItem::new("a"));
        assert_eq!(items[1].name(), "b");
        assert_eq!(items[1].options(), Some(&json!({ "loose": true })));
    }

    #[test]
    fn umd_min_file_defaults_to_true() {
        let options = BundleOptions::from_value(json!({ "umd": {} })).unwrap();
        assert!(options.umd.unwrap().min_file);
    }

    #[test]
    fn accepts_legacy_postcss_key() {
        let options =
            BundleOptions::from_value(json!({ "extraPostCSSPlugins": ["postcss-nested"] }))
                .unwrap();
        assert_eq!(options.extra_postcss_plugins, vec![PluginItem::new("postcss-nested")]);
    }

    #[test]
    fn enabled_formats_follow_planning_order() {
        let options = BundleOptions {
            umd: Some(UmdOptions::default()),
            esm: Some(OutputOverride::default()),
            ..BundleOptions::default()
        };
        assert_eq!(
            options.enabled_formats(),
            vec![ModuleFormat::Esm, ModuleFormat::Umd]
        );
    }

    #[test]
    fn format_file_reads_override() {
        let options = BundleOptions {
            cjs: Some(OutputOverride {
                file: Some("lib/index".to_string()),
            }),
            ..BundleOptions::default()
        };
        assert_eq!(options.format_file(ModuleFormat::Cjs), Some("lib/index"));
        assert_eq!(options.format_file(ModuleFormat::Esm), None);
    }

    #[test]
    fn empty_file_overrides_count_as_absent() {
        let options = BundleOptions {
            file: Some(String::new()),
            esm: Some(OutputOverride {
                file: Some(String::new()),
            }),
            umd: Some(UmdOptions {
                file: Some(String::new()),
                ..UmdOptions::default()
            }),
            ..BundleOptions::default()
        };
        assert_eq!(options.output_file(), None);
        assert_eq!(options.format_file(ModuleFormat::Esm), None);
        assert_eq!(options.format_file(ModuleFormat::Umd), None);
        assert_eq!(options.raw_format_file(ModuleFormat::Esm), Some(""));
    }

    #[test]
    fn round_trips_through_value() {
        let options = BundleOptions::default()
            .with_entry("src/index.ts")
            .with_umd(UmdOptions::named("Lib").with_global("react", "React"));
        let value = options.to_value().unwrap();
        assert_eq!(value["umd"]["globals"]["react"], json!("React"));
        assert_eq!(BundleOptions::from_value(value).unwrap(), options);
    }
}
