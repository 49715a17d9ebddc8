use async_trait::async_trait;
use tokio_postgres::types::{ToSql, Type};
use tokio_postgres::{Client, NoTls, Statement};
use tracing::{debug, warn};

use crate::config::DbConfig;
use crate::error::{Result, SecureDbError};
use crate::traits::DatabaseDriver;
use crate::types::{RawQueryResult, SqlValue};

/// PostgreSQL driver implementation using tokio-postgres.
///
/// Holds the one live session of the process. The type implements neither
/// `Clone` nor any serde traits, so a second handle to the same session
/// cannot be manufactured after construction.
pub struct TokioPostgresDriver {
    client: Client,
}

impl TokioPostgresDriver {
    /// Open the connection described by `config` and fix the session
    /// character encoding to UTF8.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(&config.connection_string(), NoTls)
            .await
            .map_err(|e| SecureDbError::ConnectionFailed(e.to_string()))?;

        // Spawn the connection handler
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                warn!(error = %e, "postgres connection closed");
            }
        });

        client
            .simple_query("SET client_encoding TO 'UTF8'")
            .await
            .map_err(|e| SecureDbError::ConnectionFailed(e.to_string()))?;

        debug!(host = %config.host, dbname = %config.dbname, "connected");
        Ok(Self { client })
    }

    /// Prepare `sql` with every placeholder declared as text, mirroring the
    /// layer's all-parameters-are-text binding contract.
    async fn prepare_text(&self, sql: &str, param_count: usize) -> Result<Statement> {
        let types = vec![Type::TEXT; param_count];
        self.client
            .prepare_typed(sql, &types)
            .await
            .map_err(|e| SecureDbError::PrepareFailed(e.to_string()))
    }
}

#[async_trait]
impl DatabaseDriver for TokioPostgresDriver {
    async fn fetch(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult> {
        let statement = self.prepare_text(sql, params.len()).await?;

        let bound = text_params(params);
        let param_refs: Vec<&(dyn ToSql + Sync)> =
            bound.iter().map(|p| p as &(dyn ToSql + Sync)).collect();

        let rows = self
            .client
            .query(&statement, &param_refs)
            .await
            .map_err(|e| SecureDbError::QueryFailed(e.to_string()))?;

        let columns: Vec<String> = statement
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let result_rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| (0..row.len()).map(|i| row_value_to_string(row, i)).collect())
            .collect();

        debug!(rows = result_rows.len(), "fetched result set");
        Ok(RawQueryResult::new(columns, result_rows))
    }

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64> {
        let statement = self.prepare_text(sql, params.len()).await?;

        let bound = text_params(params);
        let param_refs: Vec<&(dyn ToSql + Sync)> =
            bound.iter().map(|p| p as &(dyn ToSql + Sync)).collect();

        let affected = self
            .client
            .execute(&statement, &param_refs)
            .await
            .map_err(|e| SecureDbError::QueryFailed(e.to_string()))?;

        debug!(affected, "executed statement");
        Ok(affected)
    }
}

/// Render every parameter as text; `Null` stays a null text value.
fn text_params(params: &[SqlValue]) -> Vec<Option<String>> {
    params.iter().map(|p| p.as_text()).collect()
}

/// Convert a row value at a given index to a string.
fn row_value_to_string(row: &tokio_postgres::Row, index: usize) -> String {
    // Try common types and convert to string

    // Try as i32
    if let Ok(val) = row.try_get::<_, i32>(index) {
        return val.to_string();
    }

    // Try as i64
    if let Ok(val) = row.try_get::<_, i64>(index) {
        return val.to_string();
    }

    // Try as String
    if let Ok(val) = row.try_get::<_, String>(index) {
        return val;
    }

    // Try as bool
    if let Ok(val) = row.try_get::<_, bool>(index) {
        return val.to_string();
    }

    // Try as f64
    if let Ok(val) = row.try_get::<_, f64>(index) {
        return val.to_string();
    }

    // Try as Option<String> for NULL handling
    if let Ok(val) = row.try_get::<_, Option<String>>(index) {
        return val.unwrap_or_else(|| "NULL".to_string());
    }

    // Fallback
    "UNKNOWN".to_string()
}
