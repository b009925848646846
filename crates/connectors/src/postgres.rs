use crate::{
    error::{ConnectorError, DbError},
    source::DbDataSource,
};
use async_trait::async_trait;
use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use model::{
    column::ColumnMetadata,
    cursor::OffsetCursor,
    data_type::TypeClass,
    identifiers::quote_postgres,
    row::{FieldValue, RowData},
    value::Value,
};
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::{debug, warn};

const LIST_TABLES_SQL: &str = "SELECT table_name FROM information_schema.tables \
     WHERE table_schema = 'public' AND table_type = 'BASE TABLE' \
     ORDER BY table_name";

const TABLE_COLUMNS_SQL: &str = "SELECT ordinal_position, column_name, data_type, is_nullable \
     FROM information_schema.columns \
     WHERE table_schema = 'public' AND table_name = $1 \
     ORDER BY ordinal_position";

/// Postgres source adapter over a single shared pool.
#[derive(Clone)]
pub struct PgSource {
    pool: PgPool,
}

impl PgSource {
    pub async fn connect(url: &str) -> Result<Self, ConnectorError> {
        let pool = PgPool::connect(url).await?;
        Ok(PgSource { pool })
    }

    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn select_sql(table: &str, columns: &[ColumnMetadata]) -> String {
        let projection = columns
            .iter()
            .map(|c| {
                let ident = quote_postgres(&c.name);
                // Unknown types land in a TEXT target column, so fetch them
                // as text too; the wire form of e.g. uuid or jsonb would not
                // decode as a string otherwise.
                if c.type_class() == TypeClass::Other {
                    format!("{ident}::text")
                } else {
                    ident
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "SELECT {} FROM {} LIMIT $1 OFFSET $2",
            projection,
            quote_postgres(table)
        )
    }
}

#[async_trait]
impl DbDataSource for PgSource {
    async fn list_tables(&self) -> Result<Vec<String>, DbError> {
        let rows = sqlx::query(LIST_TABLES_SQL).fetch_all(&self.pool).await?;
        let tables = rows
            .iter()
            .map(|row| row.try_get::<String, _>("table_name"))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tables)
    }

    async fn table_columns(&self, table: &str) -> Result<Vec<ColumnMetadata>, DbError> {
        let rows = sqlx::query(TABLE_COLUMNS_SQL)
            .bind(table)
            .fetch_all(&self.pool)
            .await?;

        let columns = rows
            .iter()
            .map(|row| {
                let ordinal: i32 = row.try_get("ordinal_position")?;
                let name: String = row.try_get("column_name")?;
                let type_name: String = row.try_get("data_type")?;
                let nullable: String = row.try_get("is_nullable")?;
                Ok(ColumnMetadata::new(
                    ordinal as usize,
                    &name,
                    &type_name,
                    nullable == "YES",
                ))
            })
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(columns)
    }

    async fn fetch_batch(
        &self,
        table: &str,
        columns: &[ColumnMetadata],
        cursor: OffsetCursor,
    ) -> Result<Vec<RowData>, DbError> {
        let sql = Self::select_sql(table, columns);
        debug!(table, offset = cursor.offset, "fetching page");

        let rows = sqlx::query(&sql)
            .bind(cursor.batch_size as i64)
            .bind(cursor.offset as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| decode_row(table, row, columns))
            .collect())
    }
}

/// Decode one wire row into a `RowData`, cell by cell, using the declared
/// column types. NULLs always decode to `Value::Null`.
fn decode_row(table: &str, row: &PgRow, columns: &[ColumnMetadata]) -> RowData {
    let field_values = columns
        .iter()
        .enumerate()
        .map(|(idx, col)| FieldValue {
            name: col.name.clone(),
            value: decode_field(row, idx, col),
        })
        .collect();
    RowData::new(table, field_values)
}

fn decode_field(row: &PgRow, idx: usize, col: &ColumnMetadata) -> Value {
    let decoded = match col.type_class() {
        TypeClass::Integer => decode_integer(row, idx, &col.type_name),
        TypeClass::Decimal => decode_decimal(row, idx, &col.type_name),
        TypeClass::Boolean => row
            .try_get::<Option<bool>, _>(idx)
            .map(|v| v.map_or(Value::Null, Value::Boolean)),
        TypeClass::Text => row
            .try_get::<Option<String>, _>(idx)
            .map(|v| v.map_or(Value::Null, Value::String)),
        TypeClass::Timestamp => decode_timestamp(row, idx, &col.type_name),
        TypeClass::Date => row
            .try_get::<Option<NaiveDate>, _>(idx)
            .map(|v| v.map_or(Value::Null, Value::Date)),
        // Unknown types travel as text; the target column is TEXT anyway.
        TypeClass::Other => row
            .try_get::<Option<String>, _>(idx)
            .map(|v| v.map_or(Value::Null, Value::String)),
    };

    decoded.unwrap_or_else(|err| {
        warn!(
            column = %col.name,
            type_name = %col.type_name,
            %err,
            "could not decode cell, substituting NULL"
        );
        Value::Null
    })
}

fn decode_integer(row: &PgRow, idx: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    // Postgres is strict about integer widths on the wire.
    let value = match type_name {
        "smallint" | "int2" => row.try_get::<Option<i16>, _>(idx)?.map(i64::from),
        "integer" | "int4" => row.try_get::<Option<i32>, _>(idx)?.map(i64::from),
        _ => row.try_get::<Option<i64>, _>(idx)?,
    };
    Ok(value.map_or(Value::Null, Value::Int))
}

fn decode_decimal(row: &PgRow, idx: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    let value = match type_name {
        "real" => row.try_get::<Option<f32>, _>(idx)?.map(f64::from),
        "double precision" => row.try_get::<Option<f64>, _>(idx)?,
        // NUMERIC loses precision here on purpose; the target column is a
        // fixed DECIMAL(20,6) regardless.
        _ => row
            .try_get::<Option<BigDecimal>, _>(idx)?
            .and_then(|d| d.to_f64()),
    };
    Ok(value.map_or(Value::Null, Value::Float))
}

fn decode_timestamp(row: &PgRow, idx: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    let value = if type_name == "timestamp with time zone" {
        row.try_get::<Option<DateTime<Utc>>, _>(idx)?
            .map(|ts| ts.naive_utc())
    } else {
        row.try_get::<Option<NaiveDateTime>, _>(idx)?
    };
    Ok(value.map_or(Value::Null, Value::Timestamp))
}
