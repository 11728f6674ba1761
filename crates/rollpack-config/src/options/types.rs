use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output module format of a bundle job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// ECMAScript module (`import`/`export`)
    Esm,
    /// CommonJS (`require`/`module.exports`)
    Cjs,
    /// Universal module definition: browser global and importable module
    Umd,
}

impl ModuleFormat {
    /// All formats in planning order
    pub const ALL: [ModuleFormat; 3] = [ModuleFormat::Esm, ModuleFormat::Cjs, ModuleFormat::Umd];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleFormat::Esm => "esm",
            ModuleFormat::Cjs => "cjs",
            ModuleFormat::Umd => "umd",
        }
    }
}

impl FromStr for ModuleFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "esm" => Ok(ModuleFormat::Esm),
            "cjs" => Ok(ModuleFormat::Cjs),
            "umd" => Ok(ModuleFormat::Umd),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Environment the transpiled code runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Browser environment (default)
    #[default]
    Browser,
    /// Node.js
    Node,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Browser => "browser",
            Target::Node => "node",
        }
    }
}

impl FromStr for Target {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "browser" => Ok(Target::Browser),
            "node" => Ok(Target::Node),
            _ => Err(ConfigError::UnsupportedTarget(s.to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
