use crate::error::DbError;
use async_trait::async_trait;
use model::{column::ColumnMetadata, cursor::OffsetCursor, row::RowData};

/// Narrow read-side boundary the migration engine depends on.
#[async_trait]
pub trait DbDataSource: Send + Sync {
    /// Table names in the source schema, in a stable order.
    async fn list_tables(&self) -> Result<Vec<String>, DbError>;

    /// Column descriptors for one table, ordered by ordinal position.
    async fn table_columns(&self, table: &str) -> Result<Vec<ColumnMetadata>, DbError>;

    /// One page of rows, projected over `columns` in their given order.
    /// An empty result means the table is exhausted.
    async fn fetch_batch(
        &self,
        table: &str,
        columns: &[ColumnMetadata],
        cursor: OffsetCursor,
    ) -> Result<Vec<RowData>, DbError>;
}
