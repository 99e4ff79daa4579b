use crate::config::{ConfigError, ErrorKind};
use thiserror::Error;

/// Top-level error type for the api-config library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("api configuration requires an application configuration")]
    MissingApp,

    #[error("api configuration requires a database configuration")]
    MissingDatabase,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(e) => e.kind(),
            Self::MissingApp | Self::MissingDatabase => ErrorKind::InternalServerError,
        }
    }
}
