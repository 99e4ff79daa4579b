//! Project root resolution.
//!
//! Walks up from a starting directory until one contains the marker file
//! (`Cargo.toml` unless told otherwise).

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::ConfigError;

pub const DEFAULT_MARKER: &str = "Cargo.toml";

#[derive(Debug, Clone)]
pub struct RootPathResolver {
    marker: String,
}

impl Default for RootPathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RootPathResolver {
    pub fn new() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Uses `marker` instead of `Cargo.toml` to identify the root.
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Returns the closest ancestor of `start` (including `start` itself)
    /// that contains the marker as a regular file.
    pub fn resolve(&self, start: impl AsRef<Path>) -> Result<PathBuf, ConfigError> {
        let start = absolute(start.as_ref())?;
        if !start.exists() {
            return Err(ConfigError::PathNotFound(start));
        }

        let mut dir = start.as_path();
        loop {
            if dir.join(&self.marker).is_file() {
                debug!(root = %dir.display(), marker = %self.marker, "resolved project root");
                return Ok(dir.to_path_buf());
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }

        Err(ConfigError::RootNotFound {
            start,
            marker: self.marker.clone(),
        })
    }
}

/// Makes `path` absolute against the current directory and folds `.` and
/// `..` components without touching the filesystem.
fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(ConfigError::CurrentDir)?
            .join(path)
    };
    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
