use async_trait::async_trait;

use crate::error::Result;
use crate::types::{RawQueryResult, SqlValue};

/// Trait for database driver implementations.
/// Drivers are responsible for:
/// - Connecting to the database
/// - Binding text parameters into prepared statements
/// - Executing statements and converting results to RawQueryResult
///
/// Both operations prepare the statement per call; nothing is cached or
/// reused. A malformed template must surface as
/// [`SecureDbError::PrepareFailed`](crate::SecureDbError::PrepareFailed),
/// distinct from execution errors.
#[async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Prepare and execute a read statement, returning the matching rows.
    /// Parameters use PostgreSQL-style placeholders ($1, $2, etc.)
    async fn fetch(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult>;

    /// Prepare and execute a mutating statement, returning the number of
    /// rows affected.
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64>;
}
