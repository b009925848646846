use crate::{
    error::MigrationError, report::MigrationSummary, schema::SchemaTranslator,
    settings::MigrationSettings, transfer::TransferEngine,
};
use connectors::{destination::DbDataDestination, source::DbDataSource};
use tracing::{info, warn};

/// Run the whole migration: enumerate source tables and, for each one in
/// turn, translate its schema and transfer its data.
///
/// Tables are fully independent units: a failure inside one table is
/// logged, that table is skipped and the run continues. Only source
/// enumeration failure aborts the run.
pub async fn run(
    source: &dyn DbDataSource,
    destination: &dyn DbDataDestination,
    settings: &MigrationSettings,
) -> Result<MigrationSummary, MigrationError> {
    let tables = source
        .list_tables()
        .await
        .map_err(MigrationError::Source)?;

    let mut summary = MigrationSummary {
        tables_total: tables.len() as u64,
        ..Default::default()
    };

    if tables.is_empty() {
        info!("no tables found in the source database, nothing to do");
        return Ok(summary);
    }

    let translator = SchemaTranslator::new(
        &settings.type_map,
        &settings.table_engine,
        &settings.charset,
    );
    let engine = TransferEngine::new(settings.batch_size);

    for (index, table) in tables.iter().enumerate() {
        info!("[{}/{}] migrating table: {}", index + 1, tables.len(), table);

        let columns = match source.table_columns(table).await {
            Ok(columns) if columns.is_empty() => {
                warn!(table, "no columns found, skipping table");
                summary.tables_skipped += 1;
                continue;
            }
            Ok(columns) => columns,
            Err(err) => {
                warn!(table, %err, "column introspection failed, skipping table");
                summary.tables_skipped += 1;
                continue;
            }
        };

        if let Err(err) = translator.apply(destination, table, &columns).await {
            warn!(table, %err, "schema translation failed, skipping data transfer");
            summary.tables_skipped += 1;
            continue;
        }

        match engine.transfer(source, destination, table, &columns).await {
            Ok(report) => summary.absorb(&report),
            Err(err) => {
                warn!(table, %err, "data transfer aborted, table left incomplete");
                summary.tables_skipped += 1;
            }
        }
    }

    info!(
        tables_migrated = summary.tables_migrated,
        tables_skipped = summary.tables_skipped,
        rows_copied = summary.rows_copied,
        rows_skipped = summary.rows_skipped,
        "migration finished"
    );
    Ok(summary)
}
