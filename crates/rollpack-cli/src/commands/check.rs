//! Check command implementation.
//!
//! Validates bundle options and the package manifest without planning jobs.

use rollpack::PackageMetadata;
use rollpack_config::{ConfigDiscovery, ConfigValidator, FsValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Discover and load the bundle options
/// 2. Validate them, including that the entry file exists
/// 3. Read package.json and report its dependencies
///
/// Manifest problems are reported as warnings: planning still works without
/// a usable manifest.
///
/// # Errors
///
/// Returns errors when no bundle options are found or they fail validation.
pub fn execute(args: CheckArgs) -> Result<()> {
    let cwd = utils::resolve_cwd(args.cwd.as_deref())?;

    ui::info("Checking bundle options...");
    let discovery = ConfigDiscovery::new(&cwd);
    if let Some(path) = discovery.find() {
        tracing::debug!(path = %path.display(), "using bundle options");
    }
    let bundle = discovery.load()?;
    FsValidator::new(&cwd).validate(&bundle)?;

    let formats = bundle.enabled_formats();
    if formats.is_empty() {
        ui::warning("No output formats enabled; `rollpack plan` needs --format");
    } else {
        let tags: Vec<_> = formats.iter().map(|format| format.as_str()).collect();
        ui::success(&format!("Bundle options are valid ({})", tags.join(", ")));
    }

    ui::info("Checking package manifest...");
    match PackageMetadata::read(&cwd.join("package.json")) {
        Ok(metadata) => ui::success(&format!(
            "{} dependencies, {} peer dependencies",
            metadata.dependencies.len(),
            metadata.peer_dependencies.len()
        )),
        Err(err) => ui::warning(&format!("{err}; no modules will be externalized")),
    }

    Ok(())
}
