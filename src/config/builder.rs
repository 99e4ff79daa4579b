use std::collections::HashMap;
use std::path::{Path, PathBuf};

use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::debug;

use super::defaults::default_values;
use super::env::EnvironmentStore;
use super::file::read_env_file;
use super::resolve::RootPathResolver;
use super::source::{EnvSource, ProcessEnv};
use super::ConfigError;

type DefaultsExtender = Box<dyn FnOnce(&mut HashMap<String, String>)>;

/// Builder for [`EnvironmentStore`].
///
/// By default the store reads the process environment, loads `.env` from the
/// project root (the nearest ancestor of the current directory holding a
/// `Cargo.toml`), uses the built-in defaults table and does not cache.
///
/// ## Example
///
/// ```no_run
/// use api_config::EnvironmentStore;
///
/// let env = EnvironmentStore::builder()
///     .with_environment("test")
///     .with_cache(true)
///     .with_extended_defaults(|defaults| {
///         defaults.insert("QUEUE_NAME".into(), "jobs".into());
///     })
///     .build()?;
///
/// let queue = env.get("QUEUE_NAME");
/// # Ok::<(), api_config::ConfigError>(())
/// ```
#[must_use = "builders do nothing until .build() is called"]
pub struct EnvironmentStoreBuilder {
    environment: Option<String>,
    use_defaults: bool,
    use_cache: bool,
    extenders: Vec<DefaultsExtender>,
    source: Box<dyn EnvSource>,
    root: Option<PathBuf>,
    start_dir: Option<PathBuf>,
    resolver: RootPathResolver,
    load_env_file: bool,
}

impl Default for EnvironmentStoreBuilder {
    fn default() -> Self {
        Self {
            environment: None,
            use_defaults: true,
            use_cache: false,
            extenders: Vec::new(),
            source: Box::new(ProcessEnv),
            root: None,
            start_dir: None,
            resolver: RootPathResolver::new(),
            load_env_file: true,
        }
    }
}

impl std::fmt::Debug for EnvironmentStoreBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentStoreBuilder")
            .field("environment", &self.environment)
            .field("use_defaults", &self.use_defaults)
            .field("use_cache", &self.use_cache)
            .field("extenders", &self.extenders.len())
            .field("source", &self.source)
            .field("root", &self.root)
            .field("start_dir", &self.start_dir)
            .field("resolver", &self.resolver)
            .field("load_env_file", &self.load_env_file)
            .finish()
    }
}

impl EnvironmentStoreBuilder {
    /// Loads `.env.<name>` instead of `.env`.
    ///
    /// A named environment file that is missing or unreadable is skipped.
    pub fn with_environment(mut self, name: impl Into<String>) -> Self {
        self.environment = Some(name.into());
        self
    }

    /// Enables or disables the built-in defaults table.
    pub fn with_defaults(mut self, use_defaults: bool) -> Self {
        self.use_defaults = use_defaults;
        self
    }

    /// Enables or disables memoization of lookups.
    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// Registers a function that may add or replace defaults. It runs once,
    /// during [`build`](Self::build).
    pub fn with_extended_defaults(
        mut self,
        extend: impl FnOnce(&mut HashMap<String, String>) + 'static,
    ) -> Self {
        self.extenders.push(Box::new(extend));
        self
    }

    /// Reads variables from `source` instead of the process environment.
    pub fn with_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Uses `root` as the project root instead of searching for it.
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = Some(root.as_ref().to_path_buf());
        self
    }

    /// Starts the root search from `dir` instead of the current directory.
    pub fn with_start_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.start_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Identifies the project root by `marker` instead of `Cargo.toml`.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.resolver = RootPathResolver::with_marker(marker);
        self
    }

    /// Skips env file loading; only the source and defaults are consulted.
    pub fn without_env_file(mut self) -> Self {
        self.load_env_file = false;
        self
    }

    /// Builds the store, applying default extenders and loading the env file.
    pub fn build(self) -> Result<EnvironmentStore, ConfigError> {
        let mut defaults = default_values();
        for extend in self.extenders {
            extend(&mut defaults);
        }

        let mut root = None;
        let mut file_vars = HashMap::new();
        if self.load_env_file {
            let dir = match self.root {
                Some(dir) => dir,
                None => {
                    let start = match self.start_dir {
                        Some(dir) => dir,
                        None => std::env::current_dir().map_err(ConfigError::CurrentDir)?,
                    };
                    self.resolver.resolve(start)?
                }
            };
            file_vars = load_env_file(&dir, self.environment.as_deref())?;
            root = Some(dir);
        }

        debug!(
            environment = ?self.environment,
            root = ?root,
            file_vars = file_vars.len(),
            use_defaults = self.use_defaults,
            use_cache = self.use_cache,
            "environment store ready"
        );

        Ok(EnvironmentStore {
            source: self.source,
            file_vars: RwLock::new(file_vars),
            defaults,
            use_defaults: self.use_defaults,
            use_cache: self.use_cache,
            cache: DashMap::new(),
            environment: self.environment,
            root,
        })
    }
}

/// Reads `.env` (or `.env.<environment>`) from `root`.
///
/// Failures for a named environment are swallowed; the default file is
/// required.
fn load_env_file(
    root: &Path,
    environment: Option<&str>,
) -> Result<HashMap<String, String>, ConfigError> {
    let path = env_file_path(root, environment);

    if environment.is_none() {
        return read_env_file(&path)?.ok_or(ConfigError::EnvFileNotFound(path));
    }

    match read_env_file(&path) {
        Ok(Some(vars)) => Ok(vars),
        Ok(None) => {
            debug!(path = %path.display(), "environment file not found, skipping");
            Ok(HashMap::new())
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "environment file unreadable, skipping");
            Ok(HashMap::new())
        }
    }
}

fn env_file_path(root: &Path, environment: Option<&str>) -> PathBuf {
    match environment {
        Some(name) => root.join(format!(".env.{name}")),
        None => root.join(".env"),
    }
}
