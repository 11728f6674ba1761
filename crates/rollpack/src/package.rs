//! Package manifest dependency metadata.
//!
//! Only `dependencies` and `peerDependencies` matter to the assembler: they
//! decide which imports stay external in the generated bundles.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use rollpack_config::ModuleFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Maximum allowed size for package.json files (10MB)
const MAX_PACKAGE_JSON_SIZE: u64 = 10 * 1024 * 1024;

/// Dependency names declared by the target package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    /// Direct dependencies, in manifest order
    pub dependencies: IndexSet<String>,
    /// Peer dependencies, in manifest order
    pub peer_dependencies: IndexSet<String>,
}

/// On-disk manifest shape; version specifiers are ignored
#[derive(Deserialize)]
struct Manifest {
    #[serde(default)]
    dependencies: Option<IndexMap<String, Value>>,
    #[serde(default, rename = "peerDependencies")]
    peer_dependencies: Option<IndexMap<String, Value>>,
}

impl PackageMetadata {
    /// Load `<cwd>/package.json`, degrading to empty metadata on any failure.
    ///
    /// A missing manifest is expected and only logged at debug level; a
    /// manifest that exists but cannot be used is logged as a warning.
    pub fn load(cwd: &Path) -> Self {
        let path = cwd.join("package.json");
        match Self::read(&path) {
            Ok(metadata) => metadata,
            Err(Error::ManifestRead { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no package manifest, assuming no dependencies");
                Self::default()
            }
            Err(err) => {
                tracing::warn!("{err}; assuming no dependencies");
                Self::default()
            }
        }
    }

    /// Read and parse a manifest, surfacing every failure.
    pub fn read(path: &Path) -> Result<Self> {
        let size = fs::metadata(path)
            .map_err(|source| Error::ManifestRead {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        if size > MAX_PACKAGE_JSON_SIZE {
            return Err(Error::ManifestTooLarge {
                path: path.to_path_buf(),
                limit: MAX_PACKAGE_JSON_SIZE,
            });
        }

        let content = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| Error::ManifestParse {
            path: PathBuf::from(path),
            source,
        })
    }

    fn parse(content: &str) -> serde_json::Result<Self> {
        let manifest: Manifest = serde_json::from_str(content)?;
        Ok(Self {
            dependencies: manifest
                .dependencies
                .map(|deps| deps.into_keys().collect())
                .unwrap_or_default(),
            peer_dependencies: manifest
                .peer_dependencies
                .map(|deps| deps.into_keys().collect())
                .unwrap_or_default(),
        })
    }

    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.dependencies.insert(name.into());
        self
    }

    pub fn with_peer_dependency(mut self, name: impl Into<String>) -> Self {
        self.peer_dependencies.insert(name.into());
        self
    }

    /// Modules left external for a given output format.
    ///
    /// UMD bundles inline direct dependencies, so only peers stay external.
    /// Every other format externalizes both sets. Each name appears once.
    pub fn external_for(&self, format: ModuleFormat) -> Vec<String> {
        match format {
            ModuleFormat::Umd => self.peer_dependencies.iter().cloned().collect(),
            ModuleFormat::Esm | ModuleFormat::Cjs => self
                .dependencies
                .union(&self.peer_dependencies)
                .cloned()
                .collect(),
        }
    }
}
