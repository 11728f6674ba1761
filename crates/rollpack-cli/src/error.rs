//! Error handling for the rollpack CLI.
//!
//! Library errors from `rollpack-config` and `rollpack` convert into
//! [`CliError`] through `#[from]`; `main` turns the final error into a miette
//! report with [`cli_error_to_miette`].

mod diagnostic;

pub use diagnostic::cli_error_to_miette;

use rollpack_config::ConfigError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config discovery, parsing or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Job assembly failed
    #[error("Assembly error: {0}")]
    Assemble(#[from] rollpack::Error),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing job descriptors failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
