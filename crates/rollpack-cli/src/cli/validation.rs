use rollpack_config::{validate_global_name, ConfigError};

/// Parse and validate a umd global name.
///
/// Valid identifiers: MyLibrary, _internal, $jquery, lib123
/// Invalid identifiers: 123abc, my-lib, my.lib, ""
pub fn parse_global(s: &str) -> Result<String, String> {
    match validate_global_name(s) {
        Ok(()) => Ok(s.to_string()),
        Err(ConfigError::InvalidValue { hint: Some(hint), .. }) => Err(hint),
        Err(err) => Err(err.to_string()),
    }
}
