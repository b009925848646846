use crate::{report::TableReport, sanitize::sanitize_row};
use connectors::{destination::DbDataDestination, error::DbError, source::DbDataSource};
use model::{column::ColumnMetadata, cursor::OffsetCursor, identifiers::quote_mysql};
use tracing::{debug, info, warn};

/// Streams a table's rows from source to destination in fixed-size pages.
///
/// Rerunning a transfer re-inserts every row: execution is at-most-once per
/// run with no dedup, so a rerun against a non-empty target duplicates data
/// unless the target enforces a primary key.
pub struct TransferEngine {
    batch_size: usize,
}

impl TransferEngine {
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// The one parameterized INSERT used for every row of the table. The
    /// column list comes from the same descriptor sequence the sanitizer
    /// binds values from.
    pub fn insert_sql(table: &str, columns: &[ColumnMetadata]) -> String {
        let column_list = columns
            .iter()
            .map(|c| quote_mysql(&c.name))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_mysql(table),
            column_list,
            placeholders
        )
    }

    /// Copy all rows of `table`. Row-level insert failures are reported and
    /// skipped; a fetch failure aborts the table and propagates.
    pub async fn transfer(
        &self,
        source: &dyn DbDataSource,
        destination: &dyn DbDataDestination,
        table: &str,
        columns: &[ColumnMetadata],
    ) -> Result<TableReport, DbError> {
        let sql = Self::insert_sql(table, columns);
        let mut report = TableReport::new(table);
        let mut cursor = OffsetCursor::new(self.batch_size);

        loop {
            let rows = source.fetch_batch(table, columns, cursor).await?;
            if rows.is_empty() {
                break;
            }

            for row in &rows {
                let params = sanitize_row(row, columns);
                match destination.insert_row(&sql, &params).await {
                    Ok(()) => report.rows_copied += 1,
                    Err(err) => {
                        // A single bad row never aborts the batch. The row
                        // content goes into the log so nothing is lost
                        // silently.
                        let row_json = serde_json::to_string(row)
                            .unwrap_or_else(|_| "<unserializable row>".to_string());
                        warn!(table, %err, row = %row_json, "skipping row");
                        report.rows_skipped += 1;
                    }
                }
            }

            report.batches += 1;
            debug!(
                table,
                batch = report.batches,
                rows_copied = report.rows_copied,
                "batch done"
            );
            cursor = cursor.advance();
        }

        info!(
            table,
            rows_copied = report.rows_copied,
            rows_skipped = report.rows_skipped,
            "table transfer complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{MockDestination, MockSource};
    use model::value::Value;

    fn users_columns() -> Vec<ColumnMetadata> {
        vec![
            ColumnMetadata::new(1, "id", "integer", true),
            ColumnMetadata::new(2, "name", "character varying", true),
            ColumnMetadata::new(3, "active", "boolean", false),
        ]
    }

    #[test]
    fn insert_sql_has_one_placeholder_per_column() {
        assert_eq!(
            TransferEngine::insert_sql("users", &users_columns()),
            "INSERT INTO `users` (`id`, `name`, `active`) VALUES (?, ?, ?)"
        );
    }

    #[tokio::test]
    async fn exact_batch_size_table_takes_two_fetches() {
        let columns = vec![ColumnMetadata::new(1, "id", "integer", true)];
        let rows = (0..5)
            .map(|i| MockSource::row("t", vec![("id", Value::Int(i))]))
            .collect();
        let source = MockSource::with_rows(rows);
        let destination = MockDestination::accepting();

        let report = TransferEngine::new(5)
            .transfer(&source, &destination, "t", &columns)
            .await
            .unwrap();

        assert_eq!(source.fetch_count(), 2, "one full page plus one empty");
        assert_eq!(report.rows_copied, 5);
        assert_eq!(report.rows_skipped, 0);
        assert_eq!(destination.inserted().len(), 5);
    }

    #[tokio::test]
    async fn one_bad_row_does_not_abort_the_batch() {
        let columns = vec![ColumnMetadata::new(1, "id", "integer", true)];
        let rows = (0..4)
            .map(|i| MockSource::row("t", vec![("id", Value::Int(i))]))
            .collect();
        let source = MockSource::with_rows(rows);
        // Reject the row whose first parameter is 2.
        let destination = MockDestination::rejecting(|params| params[0] == Value::Int(2));

        let report = TransferEngine::new(10)
            .transfer(&source, &destination, "t", &columns)
            .await
            .unwrap();

        assert_eq!(report.rows_copied, 3);
        assert_eq!(report.rows_skipped, 1);
        let inserted = destination.inserted();
        assert_eq!(inserted.len(), 3);
        assert!(!inserted.iter().any(|p| p[0] == Value::Int(2)));
    }

    #[tokio::test]
    async fn end_to_end_users_scenario() {
        let columns = users_columns();
        let rows = vec![
            MockSource::row(
                "users",
                vec![
                    ("id", Value::Int(1)),
                    ("name", Value::String("Ann".into())),
                    ("active", Value::Boolean(true)),
                ],
            ),
            MockSource::row(
                "users",
                vec![
                    ("id", Value::Int(2)),
                    ("name", Value::String(String::new())),
                    ("active", Value::String(String::new())),
                ],
            ),
        ];
        let source = MockSource::with_rows(rows);
        let destination = MockDestination::accepting();

        let report = TransferEngine::new(100)
            .transfer(&source, &destination, "users", &columns)
            .await
            .unwrap();

        assert_eq!(report.rows_copied, 2);
        let inserted = destination.inserted();
        assert_eq!(
            inserted[0],
            vec![
                Value::Int(1),
                Value::String("Ann".into()),
                Value::Int(1), // true coerced to 1
            ]
        );
        assert_eq!(
            inserted[1],
            vec![
                Value::Int(2),
                Value::Null,   // empty nullable text
                Value::Int(0), // missing NOT NULL boolean defaulted to 0
            ]
        );
    }

    #[tokio::test]
    async fn empty_table_terminates_after_first_fetch() {
        let columns = vec![ColumnMetadata::new(1, "id", "integer", true)];
        let source = MockSource::with_rows(vec![]);
        let destination = MockDestination::accepting();

        let report = TransferEngine::new(100)
            .transfer(&source, &destination, "t", &columns)
            .await
            .unwrap();

        assert_eq!(source.fetch_count(), 1);
        assert_eq!(report.rows_copied, 0);
        assert_eq!(report.batches, 0);
    }
}
