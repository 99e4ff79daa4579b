use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a configuration failure.
///
/// A missing application-level key is the caller's fault (`BadRequest`);
/// everything else is a misconfiguration of the service itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    InternalServerError,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{0} is required")]
    MissingAppKey(&'static str),

    #[error("missing required key(s): {}", .0.join(", "))]
    MissingKeys(Vec<&'static str>),

    #[error("option '{0}' was provided more than once")]
    DuplicateOption(&'static str),

    #[error("unknown database backend: {0}")]
    UnknownBackend(String),

    #[error("invalid database URL: {reason}")]
    InvalidUrl {
        reason: String,
        #[source]
        source: Option<url::ParseError>,
    },

    #[error("invalid port '{value}'")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid boolean '{value}' for {key}")]
    InvalidBool { key: &'static str, value: String },

    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("could not find app root directory from '{start}'; {marker} not found")]
    RootNotFound { start: PathBuf, marker: String },

    #[error("could not determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("environment file not found: {0}")]
    EnvFileNotFound(PathBuf),

    #[error("failed to load environment variables from '{path}': {source}")]
    EnvFileLoad {
        path: PathBuf,
        source: dotenvy::Error,
    },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingAppKey(_) => ErrorKind::BadRequest,
            _ => ErrorKind::InternalServerError,
        }
    }
}
