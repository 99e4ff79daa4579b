//! Environment loading and project root resolution.

mod builder;
mod defaults;
mod env;
mod error;
mod file;
pub mod keys;
mod resolve;
mod source;

pub use builder::EnvironmentStoreBuilder;
pub use env::EnvironmentStore;
pub use error::{ConfigError, ErrorKind};
pub use resolve::{RootPathResolver, DEFAULT_MARKER};
pub use source::{EnvSource, MapEnv, ProcessEnv};
