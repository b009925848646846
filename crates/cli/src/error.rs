use connectors::error::{ConnectorError, DbError};
use engine::error::MigrationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Could not open one of the database connections. Fatal before any
    /// table is touched.
    #[error("Unable to connect to a database: {0}")]
    Connect(#[from] ConnectorError),

    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Migration failed: {0}")]
    Migration(#[from] MigrationError),

    #[error("Failed to serialize the summary to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Invalid connection format provided: {0}")]
    InvalidConnectionFormat(String),
}
