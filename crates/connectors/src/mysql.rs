use crate::{
    destination::DbDataDestination,
    error::{ConnectorError, DbError},
};
use async_trait::async_trait;
use model::value::Value;
use sqlx::{mysql::MySqlArguments, query::Query, MySql, MySqlPool};

fn bind_values<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &'q [Value],
) -> Query<'q, MySql, MySqlArguments> {
    for p in params {
        query = match p {
            Value::Int(i) => query.bind(*i),
            Value::Float(f) => query.bind(*f),
            Value::String(s) => query.bind(s),
            Value::Boolean(b) => query.bind(*b),
            Value::Date(d) => query.bind(*d),
            Value::Timestamp(t) => query.bind(*t),
            Value::Null => query.bind(None::<String>),
        };
    }
    query
}

/// MariaDB destination adapter over a single shared pool.
///
/// Each statement commits independently under autocommit; there is no
/// migration-wide transaction.
#[derive(Clone)]
pub struct MariaDbDestination {
    pool: MySqlPool,
}

impl MariaDbDestination {
    pub async fn connect(url: &str) -> Result<Self, ConnectorError> {
        let pool = MySqlPool::connect(url).await?;
        Ok(MariaDbDestination { pool })
    }

    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl DbDataDestination for MariaDbDestination {
    async fn execute_ddl(&self, sql: &str) -> Result<(), DbError> {
        sqlx::query(sql).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_row(&self, sql: &str, params: &[Value]) -> Result<(), DbError> {
        let query = sqlx::query(sql);
        bind_values(query, params).execute(&self.pool).await?;
        Ok(())
    }
}
