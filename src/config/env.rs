use std::collections::HashMap;
use std::path::{Path, PathBuf};

use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::debug;

use super::builder::EnvironmentStoreBuilder;
use super::file::read_env_file;
use super::source::EnvSource;
use super::ConfigError;

/// Key/value lookup backing every config object.
///
/// Values are resolved in this order:
///
/// 1. the memo cache, when caching is enabled
/// 2. the [`EnvSource`] (the process environment unless replaced)
/// 3. values loaded from the env file
/// 4. the default passed by the caller
/// 5. the defaults table, when defaults are enabled
///
/// Empty strings count as missing at every step. The env file never
/// overrides a non-empty value from the source.
#[derive(Debug)]
pub struct EnvironmentStore {
    pub(crate) source: Box<dyn EnvSource>,
    pub(crate) file_vars: RwLock<HashMap<String, String>>,
    pub(crate) defaults: HashMap<String, String>,
    pub(crate) use_defaults: bool,
    pub(crate) use_cache: bool,
    pub(crate) cache: DashMap<String, String>,
    pub(crate) environment: Option<String>,
    pub(crate) root: Option<PathBuf>,
}

impl EnvironmentStore {
    /// Creates a new environment store builder.
    pub fn builder() -> EnvironmentStoreBuilder {
        EnvironmentStoreBuilder::default()
    }

    /// Looks up `key` with no caller default.
    pub fn get(&self, key: &str) -> String {
        self.get_or(key, "")
    }

    /// Looks up `key`, using `default` if neither the source nor the env file
    /// has a value.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        if self.use_cache {
            if let Some(cached) = self.cache.get(key) {
                return cached.value().clone();
            }
        }

        let value = self.resolve(key, default);

        if self.use_cache {
            self.cache.insert(key.to_string(), value.clone());
        }
        value
    }

    fn resolve(&self, key: &str, default: &str) -> String {
        if let Some(value) = self.source.var(key).filter(|v| !v.is_empty()) {
            return value;
        }
        if let Some(value) = self.file_vars.read().get(key).filter(|v| !v.is_empty()) {
            return value.clone();
        }
        if !default.is_empty() {
            return default.to_string();
        }
        if self.use_defaults {
            if let Some(value) = self.defaults.get(key) {
                return value.clone();
            }
        }
        String::new()
    }

    /// Drops all memoized values.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Loads `KEY=VALUE` lines from `path` on top of previously loaded files.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let vars =
            read_env_file(path)?.ok_or_else(|| ConfigError::EnvFileNotFound(path.to_path_buf()))?;
        debug!(path = %path.display(), count = vars.len(), "loaded environment file");
        self.file_vars.write().extend(vars);
        Ok(())
    }

    /// Returns a copy of every value loaded from env files.
    pub fn read_file_vars(&self) -> HashMap<String, String> {
        self.file_vars.read().clone()
    }

    /// The environment name this store was built for, if any.
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    /// The project root the env file was located in, if one was resolved.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn uses_cache(&self) -> bool {
        self.use_cache
    }

    pub fn uses_defaults(&self) -> bool {
        self.use_defaults
    }
}
