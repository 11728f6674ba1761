//! rollpack CLI - plan bundler jobs from the command line.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `plan` and `check` implementations
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr
//!
//! Job descriptors are written to stdout as JSON; everything else (logs,
//! status messages, diagnostics) goes to stderr so the output can be piped
//! into a build executor.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
