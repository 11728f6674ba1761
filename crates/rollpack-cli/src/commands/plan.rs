//! Plan command implementation.
//!
//! Loads bundle options, applies command-line overrides and prints the
//! assembled job descriptors to stdout.

use rollpack::{
    assemble, assemble_configured, default_cache_dir, AssembleRequest, JobDescriptor,
};
use rollpack_config::{validate_schema, BundleOptions, ConfigDiscovery, ModuleFormat};

use crate::cli::PlanArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the plan command.
///
/// # Errors
///
/// Fails on invalid bundle options, an unsupported format tag, or when no
/// entry or format can be determined.
pub fn execute(args: PlanArgs) -> Result<()> {
    let jobs = plan(&args)?;

    let json = if args.compact {
        serde_json::to_string(&jobs)?
    } else {
        serde_json::to_string_pretty(&jobs)?
    };
    println!("{json}");

    Ok(())
}

/// Assemble the job descriptors described by `args`.
pub fn plan(args: &PlanArgs) -> Result<Vec<JobDescriptor>> {
    let cwd = utils::resolve_cwd(args.cwd.as_deref())?;
    let cache_dir = args.cache_dir.clone().unwrap_or_else(default_cache_dir);

    let bundle = apply_overrides(ConfigDiscovery::new(&cwd).load_or_default()?, args);
    validate_schema(&bundle)?;

    let jobs = match &args.format {
        Some(format) => {
            let entry = bundle.entry.clone().ok_or(rollpack::Error::MissingEntry)?;
            let request = AssembleRequest::new(&cwd, entry, format.as_str())
                .with_target(bundle.target)
                .with_bundle_options(bundle)
                .with_cache_dir(cache_dir);
            assemble(&request)?
        }
        None => assemble_configured(&cwd, &bundle, &cache_dir)?,
    };

    tracing::info!(jobs = jobs.len(), "planned bundle jobs");
    Ok(jobs)
}

fn apply_overrides(mut bundle: BundleOptions, args: &PlanArgs) -> BundleOptions {
    if let Some(entry) = &args.entry {
        bundle.entry = Some(entry.clone());
    }
    if let Some(target) = args.target {
        bundle.target = target.into();
    }
    if let Some(file) = &args.file {
        bundle.file = Some(file.clone());
    }
    // `--name` only enables umd when that format was asked for explicitly
    if let Some(name) = &args.name {
        let umd = if args.format.as_deref() == Some(ModuleFormat::Umd.as_str()) {
            Some(bundle.umd.get_or_insert_with(Default::default))
        } else {
            bundle.umd.as_mut()
        };
        match umd {
            Some(umd) => umd.name = Some(name.clone()),
            None => tracing::warn!("--name ignored: no umd section configured"),
        }
    }
    bundle
}
