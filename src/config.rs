use std::env;

use crate::error::{Result, SecureDbError};

/// Connection settings for the single logical database target: host, the
/// credential pair, and the database name. The character encoding is not
/// configurable; every session is fixed to UTF8 on connect.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl DbConfig {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        dbname: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            dbname: dbname.into(),
        }
    }

    /// Read settings from the `DB_HOST`, `DB_USER`, `DB_PASSWORD` and
    /// `DB_NAME` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: read_var("DB_HOST")?,
            user: read_var("DB_USER")?,
            password: read_var("DB_PASSWORD")?,
            dbname: read_var("DB_NAME")?,
        })
    }

    /// Render as a tokio-postgres key/value connection string.
    pub(crate) fn connection_string(&self) -> String {
        format!(
            "host={} user={} password={} dbname={}",
            self.host, self.user, self.password, self.dbname
        )
    }
}

fn read_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| {
        SecureDbError::ConnectionFailed(format!("missing environment variable {name}"))
    })
}
