use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use rollpack_config::ModuleFormat;
use serde::{Deserialize, Serialize};

use crate::plugin::PluginSpec;

/// Build mode substituted for `process.env.NODE_ENV` in UMD bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and how a job writes its bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub format: ModuleFormat,
    pub file: PathBuf,
    /// Global variable name (UMD only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// External module id to global reference (UMD only)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub globals: IndexMap<String, String>,
}

/// One bundler invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptor {
    pub input: PathBuf,
    pub output: OutputOptions,
    /// Development or production variant (UMD only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<BuildMode>,
    /// Plugins in execution order
    pub plugins: Vec<PluginSpec>,
    /// Modules supplied by the consuming environment
    pub external: Vec<String>,
}

impl JobDescriptor {
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(PluginSpec::name).collect()
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.name() == name)
    }
}
