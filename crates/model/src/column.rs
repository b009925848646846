use crate::data_type::TypeClass;
use serde::Serialize;

/// One column of a source table, as introspected from information_schema.
///
/// The sequence of `ColumnMetadata` for a table is fetched once per table
/// pass, ordered by `ordinal`, and is never re-derived afterwards: the
/// CREATE TABLE clause list, the SELECT projection and the INSERT parameter
/// order are all built from the same sequence.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnMetadata {
    pub ordinal: usize,
    pub name: String,
    /// Source dialect type name, verbatim (e.g. "character varying").
    pub type_name: String,
    pub is_nullable: bool,
}

impl ColumnMetadata {
    pub fn new(ordinal: usize, name: &str, type_name: &str, is_nullable: bool) -> Self {
        Self {
            ordinal,
            name: name.to_string(),
            type_name: type_name.to_string(),
            is_nullable,
        }
    }

    pub fn type_class(&self) -> TypeClass {
        TypeClass::of(&self.type_name)
    }
}
