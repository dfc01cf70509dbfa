//! Config file discovery.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Config file picked up from the working directory when `-c` is not given.
pub const DEFAULT_CONFIG: &str = "propedge.toml";

/// The config file to read: the explicit path, else `./propedge.toml` if it
/// exists, else none (built-in defaults).
#[must_use]
pub fn resolve_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let default = PathBuf::from(DEFAULT_CONFIG);
    default.is_file().then_some(default)
}

/// Load the resolved config, or defaults when there is no file.
///
/// # Errors
///
/// Returns an error if an explicit or discovered file fails to load.
#[allow(clippy::result_large_err)]
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    match resolve_config(explicit) {
        Some(path) => Ok((Config::load(&path)?, Some(path))),
        None => Ok((Config::default(), None)),
    }
}
