//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use rollpack_config::ConfigError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Assemble(e) => assemble_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NotFound => miette::miette!(
            "No bundle options found\n\nHint: Create a rollpack.toml or add a \"rollpack\" field to package.json"
        ),
        ConfigError::UnsupportedFormat(tag) => miette::miette!(
            "Unsupported output format `{}`\n\nHint: Use one of esm, cjs or umd",
            tag
        ),
        ConfigError::EntryNotFound { path } => miette::miette!(
            "Entry not found: {}\n\nHint: Check the `entry` option or pass an entry file to `rollpack plan`",
            path.display()
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}

fn assemble_error_to_miette(err: rollpack::Error) -> Report {
    match err {
        rollpack::Error::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}
