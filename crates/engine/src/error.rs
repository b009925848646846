use connectors::error::DbError;
use thiserror::Error;

/// Fatal migration errors.
///
/// Only failures that abort the whole run live here. Table-level and
/// row-level failures are caught, logged and counted where they happen;
/// the orchestrator never sees them as errors.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// The source could not be read during setup (table enumeration).
    #[error("source database error: {0}")]
    Source(#[source] DbError),
}
