use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Database backend a [`Dsn`](super::Dsn) renders for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Postgres,
    MySql,
    SqlServer,
    Oracle,
    MongoDb,
    Redis,
    Cassandra,
}

impl Backend {
    pub const ALL: [Backend; 7] = [
        Self::Postgres,
        Self::MySql,
        Self::SqlServer,
        Self::Oracle,
        Self::MongoDb,
        Self::Redis,
        Self::Cassandra,
    ];

    /// URL scheme used in rendered connection strings.
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::SqlServer => "sqlserver",
            Self::Oracle => "oracle",
            Self::MongoDb => "mongodb",
            Self::Redis => "redis",
            Self::Cassandra => "cassandra",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Self::Postgres => 5432,
            Self::MySql => 3306,
            Self::SqlServer => 1433,
            Self::Oracle => 1521,
            Self::MongoDb => 27017,
            Self::Redis => 6379,
            Self::Cassandra => 9042,
        }
    }

    /// Whether connection strings for this backend name a database.
    pub fn has_database(&self) -> bool {
        !matches!(self, Self::Redis)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "sqlserver" | "mssql" => Ok(Self::SqlServer),
            "oracle" => Ok(Self::Oracle),
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "redis" => Ok(Self::Redis),
            "cassandra" => Ok(Self::Cassandra),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}
