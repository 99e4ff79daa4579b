//! Environment-driven service configuration.
//!
//! Loads `.env` files from the project root, validates required keys and
//! renders database connection strings for Postgres, MySQL, SQL Server,
//! Oracle, MongoDB, Redis and Cassandra.

pub mod api;
pub mod app;
pub mod config;
pub mod database;
pub mod dsn;
mod error;

pub use api::{ApiConfig, ApiConfigBuilder};
pub use app::AppConfig;
pub use config::{ConfigError, EnvironmentStore, ErrorKind, RootPathResolver};
pub use database::{DatabaseConfig, DatabaseConfigBuilder};
pub use dsn::{Backend, Dsn, Params};
pub use error::Error;

/// Key lookup plus validation, shared by the application and database
/// configs.
pub trait Config {
    fn get(&self, key: &str) -> String;

    fn validate(&self) -> Result<(), ConfigError>;
}
