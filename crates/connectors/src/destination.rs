use crate::error::DbError;
use async_trait::async_trait;
use model::value::Value;

/// Narrow write-side boundary the migration engine depends on.
#[async_trait]
pub trait DbDataDestination: Send + Sync {
    /// Execute a DDL statement (table creation uses IF NOT EXISTS
    /// semantics, so re-running against an existing table is a no-op).
    async fn execute_ddl(&self, sql: &str) -> Result<(), DbError>;

    /// Execute a parameterized INSERT, binding `params` positionally.
    /// A rejected row surfaces as an error without terminating the
    /// connection.
    async fn insert_row(&self, sql: &str, params: &[Value]) -> Result<(), DbError>;
}
