//! # rollpack
//!
//! Turns high-level "bundle this package" options into concrete bundler job
//! descriptors, one list per output format.
//!
//! The [`assemble`] entry point reads the package manifest for dependency
//! information, builds a phase-ordered plugin [`Pipeline`] and emits
//! [`JobDescriptor`]s for an external build executor. Plugins are described,
//! never executed.
//!
//! ```no_run
//! use rollpack::{assemble, AssembleRequest};
//!
//! let request = AssembleRequest::new(".", "src/index.ts", "umd");
//! let jobs = assemble(&request)?;
//! assert_eq!(jobs.len(), 2); // development + minified production
//! # Ok::<(), rollpack::Error>(())
//! ```

mod assemble;
mod error;
mod job;
mod package;
mod pipeline;
pub mod plugin;
mod transform;

pub use assemble::{
    assemble, assemble_configured, default_cache_dir, AssembleRequest, OUTPUT_DIR,
    TYPESCRIPT_CACHE_DIR,
};
pub use error::{Error, Result};
pub use job::{BuildMode, JobDescriptor, OutputOptions};
pub use package::PackageMetadata;
pub use pipeline::Pipeline;
pub use plugin::{PluginPhase, PluginSpec};
pub use transform::{transform_defaults, TransformDefaults};

// Option and error types callers need to build requests
pub use rollpack_config::{
    BundleOptions, ConfigError, ModuleFormat, OutputOverride, PluginItem, Target, UmdOptions,
};
