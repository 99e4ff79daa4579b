//! Database configuration driven by the environment.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::config::{keys, ConfigError, EnvironmentStore};
use crate::dsn::{Backend, Dsn, Params};
use crate::Config;

/// Keys that must be non-empty for `backend`.
pub fn required_keys(backend: Backend) -> &'static [&'static str] {
    const WITH_DATABASE: &[&str] = &[
        keys::DB_HOST,
        keys::DB_USERNAME,
        keys::DB_PASSWORD,
        keys::DB_DATABASE,
    ];
    if backend.has_database() {
        WITH_DATABASE
    } else {
        &WITH_DATABASE[..3]
    }
}

/// Connection settings for one database backend.
///
/// The DSN is built on the first call to
/// [`connection_string`](Self::connection_string) and reused afterwards.
#[derive(Debug)]
pub struct DatabaseConfig {
    env: Arc<EnvironmentStore>,
    backend: Backend,
    params: Params,
    dsn: OnceCell<Dsn>,
}

impl DatabaseConfig {
    /// Postgres with no extra parameters.
    pub fn new(env: Arc<EnvironmentStore>) -> Self {
        Self {
            env,
            backend: Backend::default(),
            params: Params::new(),
            dsn: OnceCell::new(),
        }
    }

    pub fn builder(env: Arc<EnvironmentStore>) -> DatabaseConfigBuilder {
        DatabaseConfigBuilder {
            env,
            backends: Vec::new(),
            param_sets: Vec::new(),
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the DSN, building it from the environment on first use.
    ///
    /// A non-empty `DATABASE_URL` takes priority over the discrete `DB_*`
    /// keys.
    pub fn dsn(&self) -> Result<&Dsn, ConfigError> {
        self.dsn.get_or_try_init(|| self.load_from_env())
    }

    pub fn connection_string(&self) -> Result<String, ConfigError> {
        self.dsn().map(Dsn::connection_string)
    }

    /// The SSL mode for the keyword form.
    ///
    /// An `sslmode` parameter (matched case-insensitively, so a
    /// `DATABASE_URL` query counts) wins over `SSL_MODE`. Blank values are
    /// treated as absent.
    pub fn ssl_mode(&self) -> Result<Option<String>, ConfigError> {
        let from_params = self
            .dsn()?
            .params()
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("sslmode"))
            .map(|(_, value)| value.trim().to_string());
        let mode = match from_params {
            Some(mode) if !mode.is_empty() => mode,
            _ => self.env.get(keys::SSL_MODE).trim().to_string(),
        };
        Ok(Some(mode).filter(|m| !m.is_empty()))
    }

    /// Renders the libpq keyword/value form, with `sslmode` when one is set.
    pub fn keyword_string(&self) -> Result<String, ConfigError> {
        let ssl_mode = self.ssl_mode()?;
        Ok(self.dsn()?.keyword_string(ssl_mode.as_deref()))
    }

    fn load_from_env(&self) -> Result<Dsn, ConfigError> {
        let url = self.env.get(keys::DATABASE_URL);
        let url = url.trim();
        if !url.is_empty() {
            debug!(backend = %self.backend, "building DSN from {}", keys::DATABASE_URL);
            return Dsn::parse_url(url, self.backend, self.params.clone());
        }

        let default_port = self.backend.default_port().to_string();
        let port = self.env.get_or(keys::DB_PORT, &default_port);
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidPort {
                value: port.clone(),
                source: e,
            })?;

        debug!(backend = %self.backend, port, "building DSN from discrete keys");
        Dsn::builder(
            self.env.get(keys::DB_HOST),
            self.env.get(keys::DB_USERNAME),
            self.env.get(keys::DB_PASSWORD),
            self.env.get(keys::DB_DATABASE),
        )
        .port(Some(port))
        .params(self.params.clone())
        .backend(self.backend)
        .build()
    }
}

impl Config for DatabaseConfig {
    fn get(&self, key: &str) -> String {
        self.env.get(key)
    }

    /// Reports every required key that is blank, not just the first.
    fn validate(&self) -> Result<(), ConfigError> {
        let missing: Vec<&'static str> = required_keys(self.backend)
            .iter()
            .copied()
            .filter(|key| self.env.get(key).trim().is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingKeys(missing))
        }
    }
}

/// Builder for [`DatabaseConfig`].
///
/// Each option may be given at most once; [`build`](Self::build) rejects
/// repeats instead of picking one.
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct DatabaseConfigBuilder {
    env: Arc<EnvironmentStore>,
    backends: Vec<Backend>,
    param_sets: Vec<Params>,
}

impl DatabaseConfigBuilder {
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backends.push(backend);
        self
    }

    /// Extra parameters appended to the connection string.
    pub fn params(mut self, params: Params) -> Self {
        self.param_sets.push(params);
        self
    }

    pub fn build(self) -> Result<DatabaseConfig, ConfigError> {
        if self.backends.len() > 1 {
            return Err(ConfigError::DuplicateOption("backend"));
        }
        if self.param_sets.len() > 1 {
            return Err(ConfigError::DuplicateOption("params"));
        }

        Ok(DatabaseConfig {
            env: self.env,
            backend: self.backends.into_iter().next().unwrap_or_default(),
            params: self.param_sets.into_iter().next().unwrap_or_default(),
            dsn: OnceCell::new(),
        })
    }
}
