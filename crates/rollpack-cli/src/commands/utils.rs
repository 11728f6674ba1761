use std::path::{Path, PathBuf};

use crate::error::Result;

/// Package root: the `--cwd` argument if given, else the process directory.
pub(crate) fn resolve_cwd(cwd: Option<&Path>) -> Result<PathBuf> {
    match cwd {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}
