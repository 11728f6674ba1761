//! Command implementations for the rollpack CLI.
//!
//! - [`plan`] - assemble and print job descriptors
//! - [`check`] - validate bundle options and the package manifest
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod plan;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use plan::execute as plan_execute;
