use serde::Serialize;

/// Outcome of one table's data transfer.
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub table: String,
    pub rows_copied: u64,
    pub rows_skipped: u64,
    pub batches: u64,
}

impl TableReport {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            rows_copied: 0,
            rows_skipped: 0,
            batches: 0,
        }
    }
}

/// Aggregate outcome of a whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MigrationSummary {
    pub tables_total: u64,
    pub tables_migrated: u64,
    pub tables_skipped: u64,
    pub rows_copied: u64,
    pub rows_skipped: u64,
}

impl MigrationSummary {
    pub fn absorb(&mut self, report: &TableReport) {
        self.tables_migrated += 1;
        self.rows_copied += report.rows_copied;
        self.rows_skipped += report.rows_skipped;
    }
}
