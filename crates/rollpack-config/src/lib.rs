pub mod discovery;
pub mod error;
pub mod options;
pub mod validation;

// Re-export main types
pub use error::*;
pub use options::*;

// Re-export discovery and validation
pub use discovery::{discover, ConfigDiscovery, ENV_PREFIX};
pub use validation::{
    validate_fs, validate_global_name, validate_schema, ConfigValidator, FsValidator,
    SchemaValidator,
};
