//! Command-line interface definition for rollpack.
//!
//! # Command Structure
//!
//! - `rollpack plan` - print the bundler job descriptors for a package
//! - `rollpack check` - validate bundle options and the package manifest

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, PlanArgs};
pub use enums::*;
pub use validation::parse_global;

/// rollpack - plan library bundles in esm, cjs and umd formats
#[derive(Parser, Debug)]
#[command(
    name = "rollpack",
    version,
    about = "Plan library bundles in esm, cjs and umd formats",
    long_about = "rollpack turns a package's bundle options into bundler job descriptors.\n\
                  Each job names its input, output file, plugin pipeline and external\n\
                  modules, and is printed as JSON for a bundler to execute."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
