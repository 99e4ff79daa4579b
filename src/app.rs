//! Application-level settings.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{keys, ConfigError, EnvironmentStore, RootPathResolver};
use crate::Config;

/// Keys [`AppConfig::validate`] requires, in check order.
pub const REQUIRED_KEYS: [&str; 4] = [
    keys::APP_NAME,
    keys::APP_ENV,
    keys::APP_URL,
    keys::APP_DEBUG,
];

#[derive(Debug)]
pub struct AppConfig {
    env: Arc<EnvironmentStore>,
    resolver: RootPathResolver,
}

impl AppConfig {
    pub fn new(env: Arc<EnvironmentStore>) -> Self {
        Self {
            env,
            resolver: RootPathResolver::new(),
        }
    }

    /// Uses `resolver` for [`base_path`](Self::base_path) lookups.
    pub fn with_resolver(mut self, resolver: RootPathResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn name(&self) -> String {
        self.env.get(keys::APP_NAME)
    }

    pub fn environment(&self) -> String {
        self.env.get(keys::APP_ENV)
    }

    pub fn url(&self) -> String {
        self.env.get(keys::APP_URL)
    }

    pub fn key(&self) -> String {
        self.env.get(keys::APP_KEY)
    }

    pub fn timezone(&self) -> String {
        self.env.get(keys::APP_TIMEZONE)
    }

    pub fn locale(&self) -> String {
        self.env.get(keys::APP_LOCALE)
    }

    pub fn fallback_locale(&self) -> String {
        self.env.get(keys::APP_FALLBACK_LOCALE)
    }

    pub fn cipher(&self) -> String {
        self.env.get(keys::APP_CIPHER)
    }

    pub fn auth_secret(&self) -> String {
        self.env.get(keys::AUTH_SECRET)
    }

    /// Parses `APP_DEBUG` as a boolean.
    pub fn debug(&self) -> Result<bool, ConfigError> {
        let value = self.env.get(keys::APP_DEBUG);
        parse_bool(&value).ok_or(ConfigError::InvalidBool {
            key: keys::APP_DEBUG,
            value,
        })
    }

    /// Project root found by walking up from the parent of the current
    /// directory.
    pub fn base_path(&self) -> Result<PathBuf, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        let start = cwd.parent().unwrap_or(&cwd);
        self.resolver.resolve(start)
    }

    /// Project root found by walking up from `dir`.
    pub fn base_path_from(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ConfigError> {
        self.resolver.resolve(dir)
    }
}

impl Config for AppConfig {
    fn get(&self, key: &str) -> String {
        self.env.get(key)
    }

    /// Fails on the first blank required key.
    fn validate(&self) -> Result<(), ConfigError> {
        match REQUIRED_KEYS.into_iter().find(|key| self.get(key).is_empty()) {
            Some(key) => Err(ConfigError::MissingAppKey(key)),
            None => Ok(()),
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    const TRUE: [&str; 4] = ["true", "1", "yes", "on"];
    const FALSE: [&str; 4] = ["false", "0", "no", "off"];

    let s = s.trim();
    if TRUE.iter().any(|t| s.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSE.iter().any(|f| s.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}
