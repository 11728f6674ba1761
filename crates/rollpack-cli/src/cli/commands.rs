use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::parse_global;

/// Available rollpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print bundler job descriptors as JSON
    ///
    /// Without --format, plans every format enabled in the bundle options
    /// (esm, cjs, umd order). With --format, plans only that format.
    Plan(PlanArgs),

    /// Validate bundle options and the package manifest
    Check(CheckArgs),
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Entry file, relative to the package root
    ///
    /// Overrides the `entry` bundle option.
    #[arg(value_name = "ENTRY")]
    pub entry: Option<PathBuf>,

    /// Output format to plan (esm, cjs or umd)
    #[arg(short = 'f', long, value_name = "TAG")]
    pub format: Option<String>,

    /// Environment the transpile stage targets
    #[arg(short = 't', long, value_enum)]
    pub target: Option<TargetArg>,

    /// Output base name, replacing the entry file stem
    #[arg(long, value_name = "NAME")]
    pub file: Option<String>,

    /// Global variable name for umd bundles
    #[arg(short = 'n', long, value_parser = parse_global)]
    pub name: Option<String>,

    /// Package root
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Directory that holds the type-check cache
    ///
    /// Defaults to the system temp directory.
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Package root
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}
