use std::sync::Arc;

use crate::config::DbConfig;
use crate::drivers::TokioPostgresDriver;
use crate::error::Result;
use crate::executor::QueryExecutor;
use crate::traits::DatabaseDriver;

/// Main entry point for securedb.
/// Owns the shared database connection and hands out query executors.
///
/// The intended use is one client per process, constructed at startup and
/// injected wherever queries are made. The type implements neither `Clone`
/// nor any serde traits, so a second connection handle cannot be made by
/// copying or by reconstructing one from serialized state. Connection
/// failure is returned as an error; callers that cannot run degraded should
/// treat it as fatal and exit.
pub struct SecureDbClient {
    driver: Arc<dyn DatabaseDriver>,
}

impl SecureDbClient {
    /// Connect to the database described by `config`.
    ///
    /// # Example
    /// ```ignore
    /// let config = DbConfig::from_env()?;
    /// let client = SecureDbClient::connect(&config).await?;
    /// ```
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let driver = TokioPostgresDriver::connect(config).await?;
        Ok(Self {
            driver: Arc::new(driver),
        })
    }

    /// Create a new client with a custom driver.
    /// Useful for testing or using alternative database drivers.
    pub fn with_driver(driver: Arc<dyn DatabaseDriver>) -> Self {
        Self { driver }
    }

    /// Create a QueryExecutor bound to the shared connection.
    pub fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(Arc::clone(&self.driver))
    }
}
