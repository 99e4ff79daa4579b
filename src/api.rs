//! Combined application and database configuration.

use std::sync::Arc;

use crate::app::AppConfig;
use crate::config::EnvironmentStore;
use crate::database::DatabaseConfig;
use crate::{Config, Error};

/// Application and database configuration validated as one unit.
///
/// ## Example
///
/// ```no_run
/// use std::sync::Arc;
/// use api_config::{ApiConfig, EnvironmentStore};
///
/// let env = Arc::new(EnvironmentStore::builder().build()?);
/// let api = ApiConfig::new(env)?;
///
/// let dsn = api.database().connection_string()?;
/// println!("{} connects to {dsn}", api.app().name());
/// # Ok::<(), api_config::Error>(())
/// ```
#[derive(Debug)]
pub struct ApiConfig {
    app: AppConfig,
    database: DatabaseConfig,
}

impl ApiConfig {
    /// Builds an [`AppConfig`] and a Postgres [`DatabaseConfig`] over `env`
    /// and validates both.
    pub fn new(env: Arc<EnvironmentStore>) -> Result<Self, Error> {
        Self::builder()
            .with_app(AppConfig::new(Arc::clone(&env)))
            .with_database(DatabaseConfig::new(env))
            .build()
    }

    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }

    /// Validates the application config, then the database config, stopping
    /// at the first failure.
    pub fn validate(&self) -> Result<(), Error> {
        self.app.validate()?;
        self.database.validate()?;
        Ok(())
    }
}

/// Builder for [`ApiConfig`].
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ApiConfigBuilder {
    app: Option<AppConfig>,
    database: Option<DatabaseConfig>,
}

impl ApiConfigBuilder {
    pub fn with_app(mut self, app: AppConfig) -> Self {
        self.app = Some(app);
        self
    }

    pub fn with_database(mut self, database: DatabaseConfig) -> Self {
        self.database = Some(database);
        self
    }

    /// Builds and validates the `ApiConfig`.
    ///
    /// Returns an error if either part is missing or fails validation.
    pub fn build(self) -> Result<ApiConfig, Error> {
        let config = ApiConfig {
            app: self.app.ok_or(Error::MissingApp)?,
            database: self.database.ok_or(Error::MissingDatabase)?,
        };
        config.validate()?;
        Ok(config)
    }
}
