use std::path::PathBuf;

use rollpack_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no entry configured: pass an entry file or set `entry` in the bundle options")]
    MissingEntry,

    #[error("no output formats enabled: add an `esm`, `cjs` or `umd` section to the bundle options")]
    NoFormats,

    #[error("failed to read package manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid package manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("package manifest {} exceeds {limit} bytes", .path.display())]
    ManifestTooLarge { path: PathBuf, limit: u64 },

    /// Unsupported format tags and other option errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Whether this error only concerns the optional package manifest
    pub fn is_manifest_error(&self) -> bool {
        matches!(
            self,
            Error::ManifestRead { .. } | Error::ManifestParse { .. } | Error::ManifestTooLarge { .. }
        )
    }
}
