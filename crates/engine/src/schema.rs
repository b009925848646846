use crate::typemap::TypeMap;
use connectors::{destination::DbDataDestination, error::DbError};
use model::{column::ColumnMetadata, identifiers::quote_mysql};
use tracing::info;

/// Translates an introspected source table definition into a MariaDB
/// CREATE TABLE statement and applies it to the destination.
pub struct SchemaTranslator<'a> {
    type_map: &'a TypeMap,
    table_engine: &'a str,
    charset: &'a str,
}

impl<'a> SchemaTranslator<'a> {
    pub fn new(type_map: &'a TypeMap, table_engine: &'a str, charset: &'a str) -> Self {
        Self {
            type_map,
            table_engine,
            charset,
        }
    }

    /// Render the target DDL. Nullability is copied verbatim from the
    /// source descriptors, never re-derived.
    pub fn render(&self, table: &str, columns: &[ColumnMetadata]) -> String {
        let column_defs = columns
            .iter()
            .map(|col| {
                format!(
                    "{} {} {}",
                    quote_mysql(&col.name),
                    self.type_map.resolve(&col.type_name),
                    if col.is_nullable { "NULL" } else { "NOT NULL" }
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({}) ENGINE={} DEFAULT CHARSET={}",
            quote_mysql(table),
            column_defs,
            self.table_engine,
            self.charset
        )
    }

    /// Execute the rendered statement with create-if-absent semantics.
    /// Re-running against a target that already has the table is a no-op.
    pub async fn apply(
        &self,
        destination: &dyn DbDataDestination,
        table: &str,
        columns: &[ColumnMetadata],
    ) -> Result<(), DbError> {
        let sql = self.render(table, columns);
        info!(table, "creating target table");
        destination.execute_ddl(&sql).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_columns() -> Vec<ColumnMetadata> {
        vec![
            ColumnMetadata::new(1, "id", "integer", true),
            ColumnMetadata::new(2, "name", "character varying", true),
            ColumnMetadata::new(3, "active", "boolean", false),
        ]
    }

    #[test]
    fn renders_users_table_ddl() {
        let map = TypeMap::default();
        let translator = SchemaTranslator::new(&map, "InnoDB", "utf8mb4");
        assert_eq!(
            translator.render("users", &users_columns()),
            "CREATE TABLE IF NOT EXISTS `users` (`id` INT NULL, `name` VARCHAR(255) NULL, \
             `active` TINYINT(1) NOT NULL) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"
        );
    }

    #[test]
    fn nullability_tokens_match_descriptors() {
        let map = TypeMap::default();
        let translator = SchemaTranslator::new(&map, "InnoDB", "utf8mb4");
        let columns = vec![
            ColumnMetadata::new(1, "a", "text", true),
            ColumnMetadata::new(2, "b", "text", false),
        ];
        let ddl = translator.render("t", &columns);
        assert!(ddl.contains("`a` TEXT NULL"));
        assert!(ddl.contains("`b` TEXT NOT NULL"));
    }

    #[test]
    fn unknown_types_still_produce_a_clause() {
        let map = TypeMap::default();
        let translator = SchemaTranslator::new(&map, "InnoDB", "utf8mb4");
        let columns = vec![ColumnMetadata::new(1, "payload", "jsonb", true)];
        assert!(translator
            .render("events", &columns)
            .contains("`payload` TEXT NULL"));
    }

    #[test]
    fn storage_options_are_configurable() {
        let map = TypeMap::default();
        let translator = SchemaTranslator::new(&map, "Aria", "latin1");
        let ddl = translator.render("t", &[ColumnMetadata::new(1, "c", "text", true)]);
        assert!(ddl.ends_with("ENGINE=Aria DEFAULT CHARSET=latin1"));
    }
}
