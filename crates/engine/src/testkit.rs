//! In-memory source/destination doubles for engine tests.

use async_trait::async_trait;
use connectors::{destination::DbDataDestination, error::DbError, source::DbDataSource};
use model::{
    column::ColumnMetadata,
    cursor::OffsetCursor,
    row::{FieldValue, RowData},
    value::Value,
};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

type RejectFn = Box<dyn Fn(&[Value]) -> bool + Send + Sync>;

#[derive(Default)]
pub struct MockSource {
    tables: Vec<String>,
    columns: HashMap<String, Vec<ColumnMetadata>>,
    rows: HashMap<String, Vec<RowData>>,
    default_rows: Vec<RowData>,
    fail_columns_for: Option<String>,
    fetches: AtomicUsize,
}

impl MockSource {
    pub fn row(table: &str, fields: Vec<(&str, Value)>) -> RowData {
        RowData::new(
            table,
            fields
                .into_iter()
                .map(|(name, value)| FieldValue {
                    name: name.into(),
                    value,
                })
                .collect(),
        )
    }

    /// A source that serves `rows` for any table name.
    pub fn with_rows(rows: Vec<RowData>) -> Self {
        Self {
            default_rows: rows,
            ..Self::default()
        }
    }

    pub fn add_table(&mut self, name: &str, columns: Vec<ColumnMetadata>, rows: Vec<RowData>) {
        self.tables.push(name.to_string());
        self.columns.insert(name.to_string(), columns);
        self.rows.insert(name.to_string(), rows);
    }

    /// Make `table_columns` fail for one table.
    pub fn fail_columns_for(&mut self, table: &str) {
        self.fail_columns_for = Some(table.to_string());
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DbDataSource for MockSource {
    async fn list_tables(&self) -> Result<Vec<String>, DbError> {
        Ok(self.tables.clone())
    }

    async fn table_columns(&self, table: &str) -> Result<Vec<ColumnMetadata>, DbError> {
        if self.fail_columns_for.as_deref() == Some(table) {
            return Err(DbError::Unknown(format!("introspection failed for {table}")));
        }
        Ok(self.columns.get(table).cloned().unwrap_or_default())
    }

    async fn fetch_batch(
        &self,
        table: &str,
        _columns: &[ColumnMetadata],
        cursor: OffsetCursor,
    ) -> Result<Vec<RowData>, DbError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let all = self.rows.get(table).unwrap_or(&self.default_rows);
        let start = cursor.offset.min(all.len());
        let end = (cursor.offset + cursor.batch_size).min(all.len());
        Ok(all[start..end].to_vec())
    }
}

#[derive(Default)]
pub struct MockDestination {
    inserted: Mutex<Vec<Vec<Value>>>,
    ddl: Mutex<Vec<String>>,
    reject: Option<RejectFn>,
    fail_ddl_containing: Option<String>,
}

impl MockDestination {
    pub fn accepting() -> Self {
        Self::default()
    }

    /// Reject every row whose parameter list matches the predicate, as a
    /// target constraint violation would.
    pub fn rejecting(predicate: impl Fn(&[Value]) -> bool + Send + Sync + 'static) -> Self {
        Self {
            reject: Some(Box::new(predicate)),
            ..Self::default()
        }
    }

    /// Fail any DDL statement containing `fragment`.
    pub fn fail_ddl_containing(fragment: &str) -> Self {
        Self {
            fail_ddl_containing: Some(fragment.to_string()),
            ..Self::default()
        }
    }

    pub fn inserted(&self) -> Vec<Vec<Value>> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn executed_ddl(&self) -> Vec<String> {
        self.ddl.lock().unwrap().clone()
    }
}

#[async_trait]
impl DbDataDestination for MockDestination {
    async fn execute_ddl(&self, sql: &str) -> Result<(), DbError> {
        if let Some(fragment) = &self.fail_ddl_containing {
            if sql.contains(fragment.as_str()) {
                return Err(DbError::Unknown(format!("DDL rejected: {fragment}")));
            }
        }
        self.ddl.lock().unwrap().push(sql.to_string());
        Ok(())
    }

    async fn insert_row(&self, _sql: &str, params: &[Value]) -> Result<(), DbError> {
        if let Some(reject) = &self.reject {
            if reject(params) {
                return Err(DbError::Unknown("constraint violation".into()));
            }
        }
        self.inserted.lock().unwrap().push(params.to_vec());
        Ok(())
    }
}
