//! `.env` file parsing.

use std::collections::HashMap;
use std::path::Path;

use super::ConfigError;

/// Parses a dotenv-style file into a map without touching the process
/// environment.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub(crate) fn read_env_file(path: &Path) -> Result<Option<HashMap<String, String>>, ConfigError> {
    let load_error = |source| ConfigError::EnvFileLoad {
        path: path.to_path_buf(),
        source,
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(None),
        Err(e) => return Err(load_error(e)),
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(load_error)?;
        vars.insert(key, value);
    }
    Ok(Some(vars))
}
